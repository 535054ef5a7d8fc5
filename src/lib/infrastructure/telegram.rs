//! Telegram Bot API notifier

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::Parser;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::domain::contact::{
    Notification, Notifier, NotifierError, ProviderCredentials, ProviderStatus, Sent,
};

/// The public Bot API host
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Telegram configuration
#[derive(Clone, Debug, Parser)]
pub struct TelegramConfig {
    /// The bot token
    #[clap(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub bot_token: Option<String>,

    /// The chat that receives contact messages
    #[clap(long, env = "TELEGRAM_CHAT_ID")]
    pub chat_id: Option<String>,

    /// The Bot API base URL
    #[clap(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl TelegramConfig {
    /// The provider credentials, if both secrets are set
    pub fn credentials(&self) -> Option<ProviderCredentials> {
        ProviderCredentials::from_parts(self.bot_token.as_deref(), self.chat_id.as_deref())
    }

    /// A summary that is safe to show to anyone
    pub fn status(&self) -> ProviderStatus {
        ProviderStatus::from_parts(self.bot_token.as_deref(), self.chat_id.as_deref())
    }
}

/// Sends notifications through the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
}

impl TelegramNotifier {
    /// Create a new notifier talking to `api_url`
    pub fn new(api_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn send_message_url(&self, bot_token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, bot_token)
    }
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parse_mode: Option<&'a str>,
}

/// The Bot API envelope. Only the status and `ok` decide the outcome.
#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    result: Option<Value>,
    description: Option<String>,
}

impl SendMessageResponse {
    fn message_id(&self) -> Option<i64> {
        self.result
            .as_ref()
            .and_then(|result| result.get("message_id"))
            .and_then(Value::as_i64)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(
        &self,
        credentials: &ProviderCredentials,
        notification: &Notification,
    ) -> Result<Sent, NotifierError> {
        let request = SendMessageRequest {
            chat_id: &credentials.chat_id,
            text: &notification.text,
            parse_mode: notification.parse_mode,
        };

        let response = self
            .client
            .post(self.send_message_url(&credentials.bot_token))
            .json(&request)
            .send()
            .await
            .map_err(|e| NotifierError::Transport(e.without_url().to_string()))?;

        let status = response.status();

        let body = response
            .bytes()
            .await
            .map_err(|e| NotifierError::Transport(e.without_url().to_string()))?;

        let envelope = serde_json::from_slice::<SendMessageResponse>(&body).ok();

        debug!(%status, ok = envelope.as_ref().map(|e| e.ok), "sendMessage answered");

        match envelope {
            Some(envelope) if status.is_success() && envelope.ok => Ok(Sent {
                message_id: envelope.message_id(),
            }),
            envelope => Err(NotifierError::Rejected {
                status: status.as_u16(),
                description: envelope.and_then(|envelope| envelope.description),
            }),
        }
    }
}
