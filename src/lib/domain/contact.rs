//! Contact relay: turns website contact form submissions into chat
//! notifications.

mod config;
mod errors;
mod notifier;
mod service;
mod submission;
mod template;

pub use config::{ProviderCredentials, ProviderStatus, RelayConfig, RelayPolicy};
pub use errors::RelayError;
pub use notifier::{Notification, Notifier, NotifierError, Sent};
pub use service::{ContactService, ContactServiceImpl, RelayResult};
pub use submission::{
    ContactMessage, ContactName, ContactSubmission, EmailAddress, MessageBody, PhoneNumber,
    SubmissionError, SubmissionField,
};
pub use template::{MessageTemplate, UnknownTemplateError};
