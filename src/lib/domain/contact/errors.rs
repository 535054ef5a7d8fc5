//! Relay errors

use thiserror::Error;
use tracing::debug;

use super::{
    notifier::NotifierError,
    submission::{SubmissionError, SubmissionField},
};

/// Why a submission was not relayed
#[derive(Debug, Error)]
pub enum RelayError {
    /// The provider token or destination chat is not configured
    #[error("provider credentials are not configured")]
    MissingConfiguration,

    /// One or more required fields are absent or blank
    #[error("missing required fields: {}", display_fields(.0))]
    MissingFields(Vec<SubmissionField>),

    /// A field is present but malformed
    #[error(transparent)]
    InvalidField(#[from] SubmissionError),

    /// The provider answered but refused the message
    #[error("provider rejected the message with status {status}")]
    ProviderRejected {
        /// The provider's HTTP status code
        status: u16,
        /// The provider's explanation, if it gave one
        description: Option<String>,
    },

    /// The provider could not be reached
    #[error("could not reach the provider: {0}")]
    NetworkError(String),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl RelayError {
    /// A stable tag for logs and metrics
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingConfiguration => "missing-configuration",
            Self::MissingFields(_) => "missing-fields",
            Self::InvalidField(_) => "invalid-fields",
            Self::ProviderRejected { .. } => "provider-rejected",
            Self::NetworkError(_) => "network-error",
            Self::UnknownError(_) => "internal-error",
        }
    }
}

impl From<NotifierError> for RelayError {
    fn from(err: NotifierError) -> Self {
        debug!("NotifierError -> RelayError");

        match err {
            NotifierError::Rejected {
                status,
                description,
            } => RelayError::ProviderRejected {
                status,
                description,
            },
            NotifierError::Transport(reason) => RelayError::NetworkError(reason),
        }
    }
}

impl From<askama::Error> for RelayError {
    fn from(err: askama::Error) -> Self {
        debug!("askama::Error -> RelayError");

        RelayError::UnknownError(err.into())
    }
}

fn display_fields(fields: &[SubmissionField]) -> String {
    fields
        .iter()
        .map(SubmissionField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
