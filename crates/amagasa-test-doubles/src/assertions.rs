//! Assertion helpers for verification code.

pub use assert_matches::assert_matches;
pub use pretty_assertions::{assert_eq, assert_ne};

/// Assert that a result is an error whose rendered message contains a
/// fragment.
///
/// Useful when the variant alone is not enough and the test cares about
/// what a failure actually tells the reader.
#[macro_export]
macro_rules! assert_error_contains {
    ($result:expr, $fragment:expr) => {
        match $result {
            Ok(value) => panic!("expected an error, got Ok({:?})", value),
            Err(error) => {
                let rendered = error.to_string();
                assert!(
                    rendered.contains($fragment),
                    "error `{}` does not mention `{}`",
                    rendered,
                    $fragment
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use amagasa_core::{Error, Result};

    #[test]
    fn test_error_contains_accepts_matching_fragment() {
        let result: Result<()> = Err(Error::collaborator("satellite offline"));
        assert_error_contains!(result, "satellite");
    }

    #[test]
    #[should_panic(expected = "does not mention")]
    fn test_error_contains_rejects_other_errors() {
        let result: Result<()> = Err(Error::MissingInput);
        assert_error_contains!(result, "satellite");
    }

    #[test]
    #[should_panic(expected = "expected an error")]
    fn test_error_contains_rejects_ok() {
        let result: Result<u32> = Ok(7);
        assert_error_contains!(result, "anything");
    }
}
