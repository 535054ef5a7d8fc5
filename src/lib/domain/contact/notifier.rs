//! Notifier port

use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::mock;

use super::config::ProviderCredentials;

/// A rendered notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// The message text
    pub text: String,

    /// The provider markup mode, `None` for plain text
    pub parse_mode: Option<&'static str>,
}

/// The provider accepted the message
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sent {
    /// The provider's id for the delivered message
    pub message_id: Option<i64>,
}

/// Notifier errors
#[derive(Debug, Error)]
pub enum NotifierError {
    /// The provider answered with a failure
    #[error("provider rejected the message with status {status}")]
    Rejected {
        /// The HTTP status code
        status: u16,
        /// The provider's explanation
        description: Option<String>,
    },

    /// The request never got an answer
    #[error("transport error: {0}")]
    Transport(String),
}

/// Delivers notifications to a messaging provider
#[async_trait]
pub trait Notifier: Clone + Send + Sync + 'static {
    /// Send a message
    ///
    /// # Arguments
    /// * `credentials` - The bot token and destination chat.
    /// * `notification` - The rendered message.
    ///
    /// # Returns
    /// [`Sent`] when the provider accepted the message. Exactly one request
    /// is made per call; failures are not retried.
    async fn send_message(
        &self,
        credentials: &ProviderCredentials,
        notification: &Notification,
    ) -> Result<Sent, NotifierError>;
}

#[cfg(test)]
mock! {
    pub Notifier {}

    impl Clone for Notifier {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Notifier for Notifier {
        async fn send_message(
            &self,
            credentials: &ProviderCredentials,
            notification: &Notification,
        ) -> Result<Sent, NotifierError>;
    }
}
