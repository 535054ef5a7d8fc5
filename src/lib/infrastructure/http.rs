//! HTTP Server

use std::{net::IpAddr, time::Duration};

use anyhow::Result;
use axum::{
    async_trait,
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use axum_server::Handle;
use clap::Parser;
use handlers::{panic_handler, v1};
use rate_limit::{rate_limited, RateLimitConfig};
use state::AppState;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info_span, warn};

use crate::domain::contact::ContactService;

mod errors;
mod handlers;
mod open_api;
pub mod rate_limit;
pub mod servers;
pub mod state;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct HttpServerConfig {
    /// The address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// The port to listen on
    #[arg(short, long, env = "HTTP_PORT", default_value = "3000")]
    pub port: u16,

    /// PEM certificate; serves HTTPS when set together with `key_path`
    #[arg(long, env = "TLS_CERT_PATH")]
    pub cert_path: Option<String>,

    /// PEM private key
    #[arg(long, env = "TLS_KEY_PATH")]
    pub key_path: Option<String>,

    /// Origins allowed to post the contact form, comma separated, or `*`
    #[arg(long, env = "CORS_ALLOWED_ORIGIN", default_value = "*")]
    pub allowed_origin: String,

    /// Seconds to replenish one request for a client IP
    #[arg(long, env = "RATE_LIMIT_PER_SECOND", default_value = "2")]
    pub rate_limit_per_second: u64,

    /// Requests a client IP may burst
    #[arg(long, env = "RATE_LIMIT_BURST", default_value = "5")]
    pub rate_limit_burst: u32,
}

/// A runnable server
#[async_trait]
pub trait Server {
    /// Serves requests until a shutdown signal arrives.
    async fn run(self) -> Result<()>;
}

/// Create the application's router
pub fn router<C: ContactService>(state: AppState<C>) -> Router {
    let api = Router::new().nest("/api/v1", v1::router());

    with_layers(api, state)
}

/// Create the application's router with a per-client rate limit.
///
/// The limiter sits inside the CORS layer: preflights are answered before it
/// and are not counted, and 429 responses carry the CORS headers.
pub fn rate_limited_router<C: ContactService>(
    state: AppState<C>,
    rate_limit: RateLimitConfig,
) -> Result<Router> {
    let api = rate_limited(Router::new().nest("/api/v1", v1::router()), rate_limit)?;

    Ok(with_layers(api, state))
}

fn with_layers<C: ContactService>(api: Router<AppState<C>>, state: AppState<C>) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        let uri = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    let cors_layer = cors_layer(&state.config.allowed_origin);

    api.layer(CatchPanicLayer::custom(panic_handler))
        .layer(cors_layer)
        .layer(trace_layer)
        .with_state(state)
}

/// Permissive CORS for the contact form's origin(s)
fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let allow_origin = if allowed_origin.trim() == "*" {
        AllowOrigin::any()
    } else {
        let origins = allowed_origin
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect::<Vec<_>>();

        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

#[mutants::skip]
pub(crate) async fn shutdown_signal(handle: Option<Handle>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    if let Some(handle) = handle {
        debug!("shutting down gracefully");
        handle.graceful_shutdown(Some(Duration::from_secs(10)));
    }
}
