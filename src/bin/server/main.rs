#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Contact form relay server

use std::{net::SocketAddr, sync::Arc};

use anyhow::{anyhow, Result};
use clap::Parser;
use contact_relay::{
    domain::contact::{ContactServiceImpl, RelayConfig},
    infrastructure::{
        http::{
            rate_limit::RateLimitConfig,
            servers::{http::HttpServer, https::HttpsServer},
            state::{AppConfig, AppState},
            HttpServerConfig, Server,
        },
        relay::RelayPolicyConfig,
        telegram::{TelegramConfig, TelegramNotifier},
    },
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The Telegram Bot API configuration
    #[clap(flatten)]
    pub telegram: TelegramConfig,

    /// How submissions are validated and rendered
    #[clap(flatten)]
    pub relay: RelayPolicyConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load environment: {}", e);

            return Err(e.into());
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow!("failed to install the rustls crypto provider"))?;

    let args = Args::parse();

    let credentials = args.telegram.credentials();
    if credentials.is_none() {
        warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID is not set; submissions will be refused");
    }

    let notifier = Arc::new(TelegramNotifier::new(&args.telegram.api_url)?);
    let contact = ContactServiceImpl::new(
        notifier,
        RelayConfig::new(credentials, args.relay.clone().into()),
    );

    let state = AppState::new(
        AppConfig {
            allowed_origin: args.server.allowed_origin.clone(),
            provider: args.telegram.status(),
        },
        contact,
    );

    let address = SocketAddr::new(args.server.host, args.server.port);
    let rate_limit = RateLimitConfig::from(&args.server);

    info!(
        template = %args.relay.template,
        require_phone = args.relay.require_phone,
        "starting contact relay"
    );

    match (&args.server.cert_path, &args.server.key_path) {
        (Some(cert_path), Some(key_path)) => {
            HttpsServer::new(address, cert_path, key_path, rate_limit, state)
                .await?
                .run()
                .await
        }
        _ => {
            HttpServer::new(address, rate_limit, state)
                .await?
                .run()
                .await
        }
    }
}
