use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::contact::ContactService,
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod config_status;
pub mod contact;
pub mod stoplight;
pub mod uptime;

/// Routes mounted under `/api/v1`
pub fn router<C: ContactService>() -> Router<AppState<C>> {
    Router::new()
        .route("/", get(stoplight::handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler::<C>))
        .route("/config-status", get(config_status::handler::<C>))
        .route(
            "/contact",
            post(contact::handler::<C>).fallback(contact::method_not_allowed),
        )
}
