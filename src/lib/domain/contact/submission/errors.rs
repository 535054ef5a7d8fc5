//! Submission validation errors

use std::fmt;

use thiserror::Error;

/// A field of a contact form submission
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionField {
    /// The sender's name
    Name,

    /// The sender's email address
    Email,

    /// The sender's phone number
    Phone,

    /// The message itself
    Message,
}

impl SubmissionField {
    /// The field's name as it appears in the request body
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for SubmissionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A present but malformed submission field
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The field is shorter than allowed
    #[error("{field} must be at least {min} characters long")]
    TooShort {
        /// The offending field
        field: SubmissionField,
        /// The minimum length in characters
        min: usize,
    },

    /// The field is longer than allowed
    #[error("{field} must be at most {max} characters long")]
    TooLong {
        /// The offending field
        field: SubmissionField,
        /// The maximum length in characters
        max: usize,
    },

    /// The email address does not look like one
    #[error("email is invalid")]
    InvalidEmailAddress,

    /// The phone number contains characters other than digits, `+`, `-`,
    /// spaces and parentheses
    #[error("phone number is invalid")]
    InvalidPhoneNumber,
}

impl SubmissionError {
    /// The field this error refers to
    pub fn field(&self) -> SubmissionField {
        match self {
            Self::TooShort { field, .. } | Self::TooLong { field, .. } => *field,
            Self::InvalidEmailAddress => SubmissionField::Email,
            Self::InvalidPhoneNumber => SubmissionField::Phone,
        }
    }
}

/// Checks that `value` is between `min` and `max` characters long (inclusive).
pub(super) fn check_length(
    field: SubmissionField,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), SubmissionError> {
    let length = value.chars().count();

    if length < min {
        return Err(SubmissionError::TooShort { field, min });
    }

    if length > max {
        return Err(SubmissionError::TooLong { field, max });
    }

    Ok(())
}
