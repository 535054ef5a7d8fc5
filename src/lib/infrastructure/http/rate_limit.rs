//! Per-client-IP rate limiting for the public servers

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header::RETRY_AFTER, HeaderValue, Response, StatusCode},
    response::IntoResponse,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_governor::{governor::GovernorConfigBuilder, GovernorError, GovernorLayer};
use tracing::warn;

use super::{errors::ApiError, HttpServerConfig};

/// Token bucket settings, keyed on the peer IP address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Seconds it takes to replenish one request
    pub per_second: u64,

    /// The number of requests allowed in a burst
    pub burst_size: u32,
}

impl From<&HttpServerConfig> for RateLimitConfig {
    fn from(config: &HttpServerConfig) -> Self {
        Self {
            per_second: config.rate_limit_per_second,
            burst_size: config.rate_limit_burst,
        }
    }
}

/// Body of a 429 response
#[derive(Debug, Serialize, Deserialize)]
pub struct TooManyRequestsResponse {
    /// Always `false`
    pub success: bool,

    /// The error message
    pub error: String,

    /// Seconds until the next request is accepted
    pub retry_after: u64,
}

/// Rate limit error handler
pub fn rate_limit_error_handler(err: GovernorError) -> Response<Body> {
    match err {
        GovernorError::TooManyRequests { wait_time, .. } => {
            let body = TooManyRequestsResponse {
                success: false,
                error: "Too many requests".to_string(),
                retry_after: wait_time,
            };

            let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();

            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(wait_time));

            response
        }
        GovernorError::UnableToExtractKey => {
            warn!("rate limiter could not determine the client address");

            ApiError::new_500("Internal server error").into_response()
        }
        GovernorError::Other { code, msg, .. } => {
            warn!(%code, ?msg, "rate limiter error");

            ApiError::new(code, "Internal server error").into_response()
        }
    }
}

/// Wraps the routes of `router` in a rate limiter keyed on the peer address.
///
/// The router must be served with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn rate_limited<S>(router: Router<S>, config: RateLimitConfig) -> Result<Router<S>>
where
    S: Clone + Send + Sync + 'static,
{
    let governor = GovernorConfigBuilder::default()
        .per_second(config.per_second)
        .burst_size(config.burst_size)
        .error_handler(rate_limit_error_handler)
        .finish()
        .context("invalid rate limit: per second and burst size must be non-zero")?;

    Ok(router.layer(GovernorLayer {
        config: Arc::new(governor),
    }))
}
