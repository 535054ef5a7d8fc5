//! Free-text submission fields

use std::fmt;

use super::errors::{check_length, SubmissionError, SubmissionField};

/// The sender's name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    /// Shortest accepted name
    pub const MIN_LENGTH: usize = 2;

    /// Longest accepted name
    pub const MAX_LENGTH: usize = 50;

    /// Create a new name from non-blank input
    pub fn new(raw: &str) -> Result<Self, SubmissionError> {
        let trimmed = raw.trim();

        check_length(
            SubmissionField::Name,
            trimmed,
            Self::MIN_LENGTH,
            Self::MAX_LENGTH,
        )?;

        Ok(Self(trimmed.to_string()))
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The body of a contact message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    /// Shortest accepted message
    pub const MIN_LENGTH: usize = 2;

    /// Longest accepted message
    pub const MAX_LENGTH: usize = 500;

    /// Create a new message body from non-blank input
    pub fn new(raw: &str) -> Result<Self, SubmissionError> {
        let trimmed = raw.trim();

        check_length(
            SubmissionField::Message,
            trimmed,
            Self::MIN_LENGTH,
            Self::MAX_LENGTH,
        )?;

        Ok(Self(trimmed.to_string()))
    }

    /// The message as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
