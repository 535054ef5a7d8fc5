//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::v1::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Contact Relay",
        description = "Forwards website contact form submissions to a Telegram chat"
    ),
    paths(contact::handler, config_status::handler, uptime::handler),
    components(schemas(
        contact::ContactBody,
        contact::ContactResponse,
        config_status::ConfigStatusResponse,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
