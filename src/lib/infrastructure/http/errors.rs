//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::contact::{RelayError, SubmissionError, SubmissionField};

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    #[schema(example = false)]
    pub success: bool,

    /// The error message
    #[schema(example = "Missing required fields")]
    pub error: String,
}

/// An error raised in the API
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApiError {
    /// The status code
    #[schema(example = 500, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Internal server error")]
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Create a new method not allowed error
    pub fn new_405(message: &str) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                success: false,
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::MissingConfiguration => ApiError::new_500("Server configuration error"),
            RelayError::MissingFields(_) => ApiError::new_400("Missing required fields"),
            RelayError::InvalidField(err) => ApiError::new_400(&invalid_field_message(&err)),
            RelayError::ProviderRejected { .. } => ApiError::new_500("Failed to send message"),
            RelayError::NetworkError(_) => ApiError::new_500("Error sending message"),
            RelayError::UnknownError(err) => unknown_error(&err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(status = %rejection.status(), body = %rejection.body_text(), "unreadable request body");

        ApiError::new_500("Internal server error")
    }
}

fn invalid_field_message(err: &SubmissionError) -> String {
    let label = |field: SubmissionField| match field {
        SubmissionField::Name => "Name",
        SubmissionField::Email => "Email",
        SubmissionField::Phone => "Phone number",
        SubmissionField::Message => "Message",
    };

    match err {
        SubmissionError::TooShort { field, min } => {
            format!("{} must be at least {min} characters long", label(*field))
        }
        SubmissionError::TooLong { field, max } => {
            format!("{} must be at most {max} characters long", label(*field))
        }
        SubmissionError::InvalidEmailAddress => "Please provide a valid email address".to_string(),
        SubmissionError::InvalidPhoneNumber => "Please provide a valid phone number".to_string(),
    }
}

/// Logs the details and hands the client a generic message.
fn unknown_error(details: &str) -> ApiError {
    error!(details, "unexpected error");

    ApiError::new_500("Internal server error")
}
