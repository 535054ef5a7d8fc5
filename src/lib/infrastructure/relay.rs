//! Relay policy configuration

use clap::Parser;

use crate::domain::contact::{MessageTemplate, RelayPolicy};

/// Relay policy configuration
#[derive(Clone, Debug, Parser)]
pub struct RelayPolicyConfig {
    /// Whether submissions must include a phone number
    #[clap(
        long,
        env = "RELAY_REQUIRE_PHONE",
        default_value = "true",
        action = clap::ArgAction::Set
    )]
    pub require_phone: bool,

    /// The notification template: `rich` (HTML bold labels) or `plain`
    #[clap(long, env = "RELAY_TEMPLATE", default_value = "rich")]
    pub template: MessageTemplate,
}

impl From<RelayPolicyConfig> for RelayPolicy {
    fn from(config: RelayPolicyConfig) -> Self {
        Self {
            require_phone: config.require_phone,
            template: config.template,
        }
    }
}
