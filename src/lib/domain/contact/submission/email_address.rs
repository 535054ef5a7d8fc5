//! Email Address

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]*?@[^@\s]*?\.[^@\s]*$").unwrap();
}

use std::fmt;

use super::errors::{check_length, SubmissionError, SubmissionField};

/// The sender's email address
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Shortest accepted address
    pub const MIN_LENGTH: usize = 5;

    /// Longest accepted address
    pub const MAX_LENGTH: usize = 50;

    /// Create a new email address from non-blank input
    pub fn new(raw: &str) -> Result<Self, SubmissionError> {
        let trimmed = raw.trim();

        check_length(
            SubmissionField::Email,
            trimmed,
            Self::MIN_LENGTH,
            Self::MAX_LENGTH,
        )?;

        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(SubmissionError::InvalidEmailAddress);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
