//! Error types for amagasa operations.

use thiserror::Error;

use crate::coordinate::Coordinate;

/// Errors surfaced by the advisor, the validator, and their collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// The validator was handed no input at all.
    ///
    /// Distinct from an invalid string: absence means the caller lost the
    /// value, and that should fail loudly rather than read as `false`.
    #[error("input text is required")]
    MissingInput,

    /// A location-matched source call found no binding willing to answer.
    #[error("no response bound for coordinate {coordinate}")]
    UnmatchedBinding {
        /// The coordinate nothing matched.
        coordinate: Coordinate,
    },

    /// A coordinate-free source call found no coordinate-free response.
    #[error("no coordinate-free response registered")]
    NoDefaultResponse,

    /// A collaborator failed; the advisor passes this through unchanged.
    #[error("collaborator failure: {message}")]
    Collaborator {
        /// What went wrong, in the collaborator's words.
        message: String,
    },
}

impl Error {
    /// Create a collaborator failure with the given message.
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::Collaborator {
            message: message.into(),
        }
    }
}

/// Result type alias for amagasa operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::MissingInput;
        assert_eq!(error.to_string(), "input text is required");

        let error = Error::UnmatchedBinding {
            coordinate: Coordinate::new(37.58, -122.35),
        };
        assert_eq!(
            error.to_string(),
            "no response bound for coordinate (37.58, -122.35)"
        );
    }

    #[test]
    fn test_collaborator_constructor() {
        let error = Error::collaborator("satellite offline");
        assert_eq!(error.to_string(), "collaborator failure: satellite offline");
    }
}
