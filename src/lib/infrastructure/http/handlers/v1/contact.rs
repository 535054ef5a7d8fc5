//! Contact form handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::contact::{ContactService, ContactSubmission},
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// Contact form request body
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ContactBody {
    /// The sender's name
    #[schema(example = "Anna Kowalska")]
    name: Option<String>,

    /// The sender's email address
    #[schema(example = "anna@example.com")]
    email: Option<String>,

    /// The sender's phone number
    #[schema(example = "+48123456789")]
    phone: Option<String>,

    /// The message
    #[schema(example = "Proszę o kontakt")]
    message: Option<String>,
}

impl From<ContactBody> for ContactSubmission {
    fn from(body: ContactBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
            phone: body.phone,
            message: body.message,
        }
    }
}

/// Contact form response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    /// Always `true`
    #[schema(example = true)]
    success: bool,

    /// The provider's id for the delivered message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1234)]
    message_id: Option<i64>,
}

/// Relay a contact form submission
#[utoipa::path(
    post,
    operation_id = "send_contact_message",
    tag = "Contact",
    path = "/api/v1/contact",
    request_body = ContactBody,
    responses(
        (status = StatusCode::OK, description = "Message relayed", body = ContactResponse),
        (status = StatusCode::BAD_REQUEST, description = "Missing or invalid fields", body = ErrorResponse, example = json!({"success": false, "error": "Missing required fields"})),
        (status = StatusCode::METHOD_NOT_ALLOWED, description = "Only POST is accepted", body = ErrorResponse),
        (status = StatusCode::TOO_MANY_REQUESTS, description = "Too many requests"),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Misconfigured server or provider failure", body = ErrorResponse, example = json!({"success": false, "error": "Failed to send message"})),
    )
)]
pub async fn handler<C: ContactService>(
    State(state): State<AppState<C>>,
    request: Result<Json<ContactBody>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(request) = request?;

    let sent = state.contact.relay(request.into()).await?;

    Ok(Json(ContactResponse {
        success: true,
        message_id: sent.message_id,
    }))
}

/// Any method other than POST on the contact endpoint
pub async fn method_not_allowed() -> ApiError {
    ApiError::new_405("Method not allowed. Use POST instead.")
}
