//! Station code validation.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

/// Anchored on both ends: the whole string must be ASCII alphanumeric,
/// not merely contain an alphanumeric run somewhere.
static STATION_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("station code pattern compiles"));

/// Validates station identifiers.
///
/// A well-formed code is at least three characters, all ASCII letters or
/// digits. The length check runs first, so the empty string is rejected
/// on length and never reaches the pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct StationCodeValidator;

impl StationCodeValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Whether `text` is a well-formed station code.
    ///
    /// `None` is an [`Error::MissingInput`], not `Ok(false)`: an absent
    /// value means the caller lost it, which is a different failure from
    /// a string that merely fails the rules.
    pub fn is_valid(&self, text: Option<&str>) -> Result<bool> {
        let text = text.ok_or(Error::MissingInput)?;
        let valid = text.len() >= 3 && STATION_CODE.is_match(text);
        debug!(code = %text, valid, "validated station code");
        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::minimum_length("abc", true)]
    #[case::mixed_case_and_digits("Ab1", true)]
    #[case::all_digits("123", true)]
    #[case::digits_then_letters("123ab", true)]
    #[case::all_upper("KIX", true)]
    #[case::too_short("ab", false)]
    #[case::single_character("a", false)]
    #[case::empty("", false)]
    #[case::embedded_space("ab c", false)]
    #[case::punctuation("ab!", false)]
    #[case::embedded_symbol("abc@123", false)]
    #[case::leading_junk("!abc", false)]
    #[case::trailing_junk("abc!", false)]
    #[case::non_ascii("東京駅", false)]
    fn test_is_valid_cases(#[case] text: &str, #[case] expected: bool) {
        let validator = StationCodeValidator::new();
        assert_eq!(validator.is_valid(Some(text)).unwrap(), expected);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let validator = StationCodeValidator::new();
        assert_matches!(validator.is_valid(None), Err(Error::MissingInput));
    }

    proptest! {
        #[test]
        fn prop_alphanumeric_of_length_three_or_more_is_valid(code in "[A-Za-z0-9]{3,40}") {
            let validator = StationCodeValidator::new();
            prop_assert!(validator.is_valid(Some(&code)).unwrap());
        }

        #[test]
        fn prop_shorter_than_three_is_invalid(code in "[A-Za-z0-9]{0,2}") {
            let validator = StationCodeValidator::new();
            prop_assert!(!validator.is_valid(Some(&code)).unwrap());
        }

        #[test]
        fn prop_any_non_alphanumeric_character_invalidates(
            prefix in "[A-Za-z0-9]{1,10}",
            bad in "[!@#$%^&*()_+ .,:;?-]",
            suffix in "[A-Za-z0-9]{1,10}",
        ) {
            // Long enough to pass the length check, so the pattern decides.
            let code = format!("{}{}{}", prefix, bad, suffix);
            let validator = StationCodeValidator::new();
            prop_assert!(!validator.is_valid(Some(&code)).unwrap());
        }
    }
}
