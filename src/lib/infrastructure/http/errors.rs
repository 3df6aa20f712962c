//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::enquiries::{EnquiryError, SendEnquiryError};

/// Returned when the notification could not be delivered
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send enquiry. Please try again.";

/// Returned for any unexpected failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Server error. Please contact us directly.";

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    #[schema(example = false)]
    pub success: bool,

    /// The error message
    #[schema(example = "Name is required")]
    pub message: String,
}

/// An error raised in the API
#[derive(Debug)]
pub struct ApiError {
    /// The status code
    pub status: StatusCode,

    /// The error message
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

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// The generic internal server error
    pub fn internal() -> Self {
        Self::new_500(INTERNAL_ERROR_MESSAGE)
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
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        error!("Error processing enquiry: {err:#}");

        ApiError::internal()
    }
}

impl From<EnquiryError> for ApiError {
    fn from(err: EnquiryError) -> Self {
        ApiError::new_400(&err.to_string())
    }
}

impl From<SendEnquiryError> for ApiError {
    fn from(err: SendEnquiryError) -> Self {
        match err {
            SendEnquiryError::DeliveryFailed => ApiError::new_500(DELIVERY_FAILED_MESSAGE),
            SendEnquiryError::UnknownError(err) => err.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        error!("Error processing enquiry: {}", rejection.body_text());

        ApiError::internal()
    }
}
