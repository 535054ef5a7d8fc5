//! Contact relay service

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

#[cfg(test)]
use mockall::mock;

use super::{
    config::RelayConfig,
    errors::RelayError,
    notifier::{Notifier, Sent},
    submission::ContactSubmission,
};

/// Outcome of a single relay
pub type RelayResult = Result<Sent, RelayError>;

/// Contact relay service
#[async_trait]
pub trait ContactService: Clone + Send + Sync + 'static {
    /// Validates a submission, renders it and forwards it to the provider.
    ///
    /// # Arguments
    /// * `submission` - The contact form submission as received.
    ///
    /// # Returns
    /// - [`Ok`] with [`Sent`] when the provider accepted the message.
    /// - [`Err`] with a [`RelayError`] describing why it was not relayed.
    ///   Configuration and validation failures make no outbound request.
    async fn relay(&self, submission: ContactSubmission) -> RelayResult;
}

#[cfg(test)]
mock! {
    pub ContactService {}

    impl Clone for ContactService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl ContactService for ContactService {
        async fn relay(&self, submission: ContactSubmission) -> RelayResult;
    }
}

/// Contact relay service implementation
#[derive(Debug, Clone)]
pub struct ContactServiceImpl<N>
where
    N: Notifier,
{
    notifier: Arc<N>,
    config: Arc<RelayConfig>,
}

impl<N> ContactServiceImpl<N>
where
    N: Notifier,
{
    /// Creates a new contact relay service.
    pub fn new(notifier: Arc<N>, config: RelayConfig) -> Self {
        Self {
            notifier,
            config: Arc::new(config),
        }
    }

    async fn relay_once(&self, submission: ContactSubmission) -> RelayResult {
        let credentials = self
            .config
            .credentials
            .as_ref()
            .ok_or(RelayError::MissingConfiguration)?;

        let message = submission.validate(&self.config.policy)?;
        let notification = self.config.policy.template.render(&message)?;

        let sent = self
            .notifier
            .send_message(credentials, &notification)
            .await?;

        Ok(sent)
    }
}

#[async_trait]
impl<N> ContactService for ContactServiceImpl<N>
where
    N: Notifier,
{
    async fn relay(&self, submission: ContactSubmission) -> RelayResult {
        let span = info_span!("relay", relay_id = %Uuid::now_v7());

        async move {
            let result = self.relay_once(submission).await;

            match &result {
                Ok(sent) => info!(message_id = ?sent.message_id, "contact message relayed"),
                Err(err @ RelayError::MissingConfiguration) => {
                    error!(reason = err.reason(), "relay is not configured")
                }
                Err(err @ (RelayError::MissingFields(_) | RelayError::InvalidField(_))) => {
                    info!(reason = err.reason(), %err, "submission refused")
                }
                Err(RelayError::ProviderRejected {
                    status,
                    description,
                }) => warn!(
                    reason = "provider-rejected",
                    status,
                    description = description.as_deref().unwrap_or_default(),
                    "provider refused the message"
                ),
                Err(err) => warn!(reason = err.reason(), %err, "relay failed"),
            }

            result
        }
        .instrument(span)
        .await
    }
}
