//! A local stand-in for the Bot API

#![allow(dead_code)]

use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex},
};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing, Json, Router,
};
use contact_relay::{
    domain::contact::{ContactServiceImpl, ProviderCredentials, RelayConfig, RelayPolicy},
    infrastructure::telegram::TelegramNotifier,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const BOT_TOKEN: &str = "123456:relay-test-token";
pub const CHAT_ID: &str = "-10042";

/// A request the provider received
#[derive(Debug, Clone)]
pub struct Received {
    pub bot: String,
    pub body: Value,
}

#[derive(Debug, Clone)]
struct ProviderState {
    status: StatusCode,
    reply: Value,
    received: Arc<Mutex<Vec<Received>>>,
}

/// A running provider that answers every `sendMessage` with a canned reply
#[derive(Debug, Clone)]
pub struct MockProvider {
    pub url: String,
    received: Arc<Mutex<Vec<Received>>>,
}

impl MockProvider {
    /// Accepts every message.
    pub async fn accepting() -> anyhow::Result<Self> {
        Self::start(
            StatusCode::OK,
            json!({ "ok": true, "result": { "message_id": 77 } }),
        )
        .await
    }

    /// Answers with `status` and `reply`.
    pub async fn start(status: StatusCode, reply: Value) -> anyhow::Result<Self> {
        let received = Arc::new(Mutex::new(Vec::new()));

        let router = Router::new()
            .route("/:bot/sendMessage", routing::post(send_message))
            .with_state(ProviderState {
                status,
                reply,
                received: received.clone(),
            });

        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .context("Failed to bind mock provider")?;
        let address = listener.local_addr()?;

        tokio::spawn(async move { axum::serve(listener, router).await });

        Ok(Self {
            url: format!("http://{address}"),
            received,
        })
    }

    pub fn received(&self) -> Vec<Received> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.received().len()
    }
}

async fn send_message(
    State(state): State<ProviderState>,
    Path(bot): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if let Ok(mut received) = state.received.lock() {
        received.push(Received { bot, body });
    }

    (state.status, Json(state.reply))
}

/// An address nothing listens on.
pub async fn closed_address() -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let address = listener.local_addr()?;
    drop(listener);

    Ok(address)
}

pub fn credentials() -> Option<ProviderCredentials> {
    ProviderCredentials::from_parts(Some(BOT_TOKEN), Some(CHAT_ID))
}

/// A relay service wired to the provider at `api_url`
pub fn service(
    api_url: &str,
    credentials: Option<ProviderCredentials>,
    policy: RelayPolicy,
) -> anyhow::Result<ContactServiceImpl<TelegramNotifier>> {
    let notifier = Arc::new(TelegramNotifier::new(api_url)?);

    Ok(ContactServiceImpl::new(
        notifier,
        RelayConfig::new(credentials, policy),
    ))
}
