//! Contact form submissions

mod email_address;
mod errors;
mod phone_number;
mod text_fields;

pub use email_address::EmailAddress;
pub use errors::{SubmissionError, SubmissionField};
pub use phone_number::PhoneNumber;
pub use text_fields::{ContactName, MessageBody};

use super::{config::RelayPolicy, errors::RelayError};

/// A contact form submission exactly as it arrived
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    /// The sender's name
    pub name: Option<String>,

    /// The sender's email address
    pub email: Option<String>,

    /// The sender's phone number
    pub phone: Option<String>,

    /// The message
    pub message: Option<String>,
}

/// A validated contact message, ready to be formatted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    /// The sender's name
    pub name: ContactName,

    /// The sender's email address
    pub email: EmailAddress,

    /// The sender's phone number, if one was given
    pub phone: Option<PhoneNumber>,

    /// The message
    pub message: MessageBody,
}

impl ContactSubmission {
    /// Validates the submission against `policy`.
    ///
    /// Every required field that is absent or blank is reported at once as
    /// [`RelayError::MissingFields`]. Only when nothing is missing are the
    /// fields parsed, and the first malformed one is reported as
    /// [`RelayError::InvalidField`].
    pub fn validate(&self, policy: &RelayPolicy) -> Result<ContactMessage, RelayError> {
        let missing: Vec<SubmissionField> = [
            (SubmissionField::Name, &self.name, true),
            (SubmissionField::Email, &self.email, true),
            (SubmissionField::Phone, &self.phone, policy.require_phone),
            (SubmissionField::Message, &self.message, true),
        ]
        .into_iter()
        .filter(|(_, value, required)| *required && non_blank(value.as_deref()).is_none())
        .map(|(field, _, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(RelayError::MissingFields(missing));
        }

        Ok(ContactMessage {
            name: ContactName::new(filled(&self.name))?,
            email: EmailAddress::new(filled(&self.email))?,
            phone: non_blank(self.phone.as_deref())
                .map(PhoneNumber::new)
                .transpose()?,
            message: MessageBody::new(filled(&self.message))?,
        })
    }
}

/// Returns the value unless it is absent or only whitespace.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

fn filled(value: &Option<String>) -> &str {
    non_blank(value.as_deref()).unwrap_or_default()
}

/// Submission fixtures
#[cfg(test)]
pub(crate) mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::domain::contact::template::MessageTemplate;

    /// A complete, valid submission
    pub fn anna() -> ContactSubmission {
        ContactSubmission {
            name: Some("Anna Kowalska".to_string()),
            email: Some("anna@example.com".to_string()),
            phone: Some("+48123456789".to_string()),
            message: Some("Proszę o kontakt".to_string()),
        }
    }

    fn policy(require_phone: bool) -> RelayPolicy {
        RelayPolicy {
            require_phone,
            template: MessageTemplate::RichText,
        }
    }

    #[test]
    fn test_valid_submission() -> TestResult {
        let message = anna().validate(&policy(true))?;

        assert_eq!(message.name.as_str(), "Anna Kowalska");
        assert_eq!(message.email.as_str(), "anna@example.com");
        assert_eq!(message.phone.map(|p| p.to_string()), Some("+48123456789".into()));
        assert_eq!(message.message.as_str(), "Proszę o kontakt");

        Ok(())
    }

    #[test]
    fn test_missing_phone_when_required() {
        let submission = ContactSubmission {
            phone: None,
            ..anna()
        };

        let result = submission.validate(&policy(true));

        assert!(matches!(
            result,
            Err(RelayError::MissingFields(fields)) if fields == vec![SubmissionField::Phone]
        ));
    }

    #[test]
    fn test_missing_phone_when_optional() -> TestResult {
        let submission = ContactSubmission {
            phone: None,
            ..anna()
        };

        let message = submission.validate(&policy(false))?;

        assert!(message.phone.is_none());

        Ok(())
    }

    #[test]
    fn test_optional_phone_is_still_validated() {
        let submission = ContactSubmission {
            phone: Some("not a number".to_string()),
            ..anna()
        };

        assert!(matches!(
            submission.validate(&policy(false)),
            Err(RelayError::InvalidField(SubmissionError::InvalidPhoneNumber))
        ));
    }

    #[test]
    fn test_blank_fields_count_as_missing() {
        let submission = ContactSubmission {
            name: Some("   ".to_string()),
            email: None,
            phone: Some("".to_string()),
            message: Some("\n\t".to_string()),
        };

        let result = submission.validate(&policy(true));

        assert!(matches!(
            result,
            Err(RelayError::MissingFields(fields)) if fields == vec![
                SubmissionField::Name,
                SubmissionField::Email,
                SubmissionField::Phone,
                SubmissionField::Message,
            ]
        ));
    }

    #[test]
    fn test_missing_fields_win_over_invalid_ones() {
        let submission = ContactSubmission {
            email: Some("not an email".to_string()),
            message: None,
            ..anna()
        };

        assert!(matches!(
            submission.validate(&policy(true)),
            Err(RelayError::MissingFields(_))
        ));
    }

    #[test]
    fn test_invalid_email() {
        let submission = ContactSubmission {
            email: Some("not an email".to_string()),
            ..anna()
        };

        assert!(matches!(
            submission.validate(&policy(true)),
            Err(RelayError::InvalidField(SubmissionError::InvalidEmailAddress))
        ));
    }
}
