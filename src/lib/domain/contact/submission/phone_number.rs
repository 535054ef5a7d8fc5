//! Phone number

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::errors::{check_length, SubmissionError, SubmissionField};

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9+\-\s()]*$").unwrap();
}

/// The sender's phone number, kept as typed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Shortest accepted number
    pub const MIN_LENGTH: usize = 9;

    /// Longest accepted number
    pub const MAX_LENGTH: usize = 15;

    /// Create a new phone number from non-blank input
    pub fn new(raw: &str) -> Result<Self, SubmissionError> {
        let trimmed = raw.trim();

        if !PHONE_REGEX.is_match(trimmed) {
            return Err(SubmissionError::InvalidPhoneNumber);
        }

        check_length(
            SubmissionField::Phone,
            trimmed,
            Self::MIN_LENGTH,
            Self::MAX_LENGTH,
        )?;

        Ok(Self(trimmed.to_string()))
    }

    /// The number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_international_number() -> TestResult {
        let phone = PhoneNumber::new("+48123456789")?;

        assert_eq!(phone.as_str(), "+48123456789");

        Ok(())
    }

    #[test]
    fn test_separators_are_allowed() -> TestResult {
        let phone = PhoneNumber::new("(22) 123-45-67")?;

        assert_eq!(phone.to_string(), "(22) 123-45-67");

        Ok(())
    }

    #[test]
    fn test_letters_are_rejected() {
        assert_eq!(
            PhoneNumber::new("call me maybe"),
            Err(SubmissionError::InvalidPhoneNumber)
        );
    }

    #[test]
    fn test_length_bounds() {
        assert!(matches!(
            PhoneNumber::new("12345678"),
            Err(SubmissionError::TooShort { min: 9, .. })
        ));
        assert!(matches!(
            PhoneNumber::new("+48 123 456 789 0"),
            Err(SubmissionError::TooLong { max: 15, .. })
        ));
    }
}
