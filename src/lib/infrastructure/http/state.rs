//! Application state module

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::domain::contact::{ContactService, ProviderStatus};

/// Application configuration
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Origins allowed to call the API from a browser
    pub allowed_origin: String,

    /// Masked provider configuration, for diagnostics
    pub provider: ProviderStatus,
}

/// Global application state
#[derive(Clone)]
pub struct AppState<C: ContactService> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// The application configuration
    pub config: AppConfig,

    /// Contact relay service
    pub contact: Arc<C>,
}

/// Implementation of the application state
impl<C> AppState<C>
where
    C: ContactService,
{
    /// Create a new application state
    pub fn new(config: AppConfig, contact: C) -> Self {
        Self {
            config,
            start_time: Utc::now(),
            contact: Arc::new(contact),
        }
    }
}

impl<C> fmt::Debug for AppState<C>
where
    C: ContactService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("config", &self.config)
            .field("contact", &"ContactService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::contact::tests::MockContactService;

/// State around a mocked contact service and a configured provider
#[cfg(test)]
pub fn test_state(contact: Option<MockContactService>) -> AppState<MockContactService> {
    let contact = contact
        .map(Arc::new)
        .unwrap_or_else(|| Arc::new(MockContactService::new()));

    let config = AppConfig {
        allowed_origin: "*".to_string(),
        provider: ProviderStatus::from_parts(Some("123456:test-token"), Some("-10042")),
    };

    AppState {
        start_time: Utc::now(),
        config,
        contact,
    }
}
