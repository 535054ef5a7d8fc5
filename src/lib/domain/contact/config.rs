//! Relay configuration

use std::fmt;

use super::template::MessageTemplate;

/// Which fields are required and how the notification is rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelayPolicy {
    /// Whether a phone number must be supplied
    pub require_phone: bool,

    /// The notification template
    pub template: MessageTemplate,
}

impl Default for RelayPolicy {
    fn default() -> Self {
        Self {
            require_phone: true,
            template: MessageTemplate::RichText,
        }
    }
}

/// Secrets needed to reach the messaging provider
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    /// The bot API token
    pub bot_token: String,

    /// The destination chat
    pub chat_id: String,
}

impl ProviderCredentials {
    /// Builds credentials when both secrets are present and non-blank.
    pub fn from_parts(bot_token: Option<&str>, chat_id: Option<&str>) -> Option<Self> {
        let bot_token = bot_token.map(str::trim).filter(|s| !s.is_empty())?;
        let chat_id = chat_id.map(str::trim).filter(|s| !s.is_empty())?;

        Some(Self {
            bot_token: bot_token.to_string(),
            chat_id: chat_id.to_string(),
        })
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Everything the relay needs besides the notifier itself
#[derive(Clone, Debug, Default)]
pub struct RelayConfig {
    /// Provider secrets; `None` when the deployment is missing them
    pub credentials: Option<ProviderCredentials>,

    /// Field requirements and template
    pub policy: RelayPolicy,
}

impl RelayConfig {
    /// Create a new relay configuration
    pub fn new(credentials: Option<ProviderCredentials>, policy: RelayPolicy) -> Self {
        Self {
            credentials,
            policy,
        }
    }
}

/// A safe-to-publish summary of the provider configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderStatus {
    /// Whether a bot token is set
    pub has_bot_token: bool,

    /// The bot token with everything but its edges hidden
    pub bot_token_masked: String,

    /// Whether a destination chat is set
    pub has_chat_id: bool,
}

impl ProviderStatus {
    /// Summarises the raw configuration values.
    pub fn from_parts(bot_token: Option<&str>, chat_id: Option<&str>) -> Self {
        let bot_token = bot_token.map(str::trim).filter(|s| !s.is_empty());

        Self {
            has_bot_token: bot_token.is_some(),
            bot_token_masked: bot_token.map_or_else(|| "not set".to_string(), mask_token),
            has_chat_id: chat_id.is_some_and(|s| !s.trim().is_empty()),
        }
    }
}

/// Keeps the first and last four characters of a token.
///
/// Tokens of eight characters or fewer are hidden entirely.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();

    if chars.len() <= 8 {
        return "****".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();

    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_secrets_are_missing() {
        assert!(ProviderCredentials::from_parts(Some("123:abc"), Some("  ")).is_none());
        assert!(ProviderCredentials::from_parts(None, Some("42")).is_none());
        assert!(ProviderCredentials::from_parts(Some("123:abc"), Some("42")).is_some());
    }

    #[test]
    fn test_debug_hides_token() {
        let credentials =
            ProviderCredentials::from_parts(Some("123456:SECRET-TOKEN-VALUE"), Some("42"))
                .expect("credentials");

        let debug = format!("{credentials:?}");

        assert!(!debug.contains("SECRET-TOKEN"));
        assert!(debug.contains("1234...ALUE"));
    }

    #[test]
    fn test_status_masks_token() {
        let status = ProviderStatus::from_parts(Some("123456:SECRET-TOKEN-VALUE"), None);

        assert_eq!(
            status,
            ProviderStatus {
                has_bot_token: true,
                bot_token_masked: "1234...ALUE".to_string(),
                has_chat_id: false,
            }
        );
    }

    #[test]
    fn test_status_short_and_missing_tokens() {
        assert_eq!(
            ProviderStatus::from_parts(Some("short"), Some("42")).bot_token_masked,
            "****"
        );
        assert_eq!(
            ProviderStatus::from_parts(None, Some("42")).bot_token_masked,
            "not set"
        );
    }
}
