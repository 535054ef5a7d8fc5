//! Liveness probe for the relay

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{domain::contact::ContactService, infrastructure::http::state::AppState};

/// How long the relay has been up
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UptimeResponse {
    /// Whole seconds since the server started
    #[schema(example = 3600)]
    pub uptime: i64,

    /// When the server started
    #[schema(example = "2024-05-01T08:00:00Z")]
    pub started_at: DateTime<Utc>,

    /// The running crate version
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Report how long the relay has been running
#[utoipa::path(
    get,
    operation_id = "uptime",
    tag = "System",
    path = "/api/v1/uptime",
    responses(
        (status = StatusCode::OK, description = "The relay is up", body = UptimeResponse),
        (status = StatusCode::TOO_MANY_REQUESTS, description = "Too many requests"),
    )
)]
pub async fn handler<C: ContactService>(State(state): State<AppState<C>>) -> Json<UptimeResponse> {
    let uptime = (Utc::now() - state.start_time).num_seconds().max(0);

    Json(UptimeResponse {
        uptime,
        started_at: state.start_time,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use chrono::Duration;
    use testresult::TestResult;

    use super::UptimeResponse;
    use crate::infrastructure::http::{router, state::test_state};

    #[tokio::test]
    async fn test_uptime_counts_from_start() -> TestResult {
        let mut state = test_state(None);
        state.start_time -= Duration::seconds(90);
        let started_at = state.start_time;

        let response = TestServer::new(router(state))?.get("/api/v1/uptime").await;

        response.assert_status_ok();

        let json = response.json::<UptimeResponse>();

        assert!((90..95).contains(&json.uptime), "uptime was {}", json.uptime);
        assert_eq!(json.started_at, started_at);
        assert_eq!(json.version, env!("CARGO_PKG_VERSION"));

        Ok(())
    }
}
