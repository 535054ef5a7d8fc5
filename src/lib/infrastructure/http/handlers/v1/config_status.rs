//! Provider configuration diagnostics

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::contact::ContactService,
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Whether the provider credentials are configured. Never carries the token itself.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConfigStatusResponse {
    /// A bot token is configured
    #[schema(example = true)]
    pub has_bot_token: bool,

    /// The first and last four characters of the token
    #[schema(example = "1234...wxyz")]
    pub bot_token_masked: String,

    /// A chat id is configured
    #[schema(example = true)]
    pub has_chat_id: bool,
}

/// Report whether the provider is configured
#[utoipa::path(
    get,
    operation_id = "config_status",
    tag = "System",
    path = "/api/v1/config-status",
    responses(
        (status = StatusCode::OK, description = "Configuration status", body = ConfigStatusResponse),
        (status = StatusCode::TOO_MANY_REQUESTS, description = "Too many requests"),
    )
)]
pub async fn handler<C: ContactService>(
    State(state): State<AppState<C>>,
) -> Result<Json<ConfigStatusResponse>, ApiError> {
    let provider = &state.config.provider;

    Ok(Json(ConfigStatusResponse {
        has_bot_token: provider.has_bot_token,
        bot_token_masked: provider.bot_token_masked.clone(),
        has_chat_id: provider.has_chat_id,
    }))
}
