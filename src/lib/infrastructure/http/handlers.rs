//! API handler modules

use std::any::Any;

use axum::{
    body::Body,
    http::Response,
    response::IntoResponse,
};
use tracing::error;

use super::errors::ApiError;

pub mod docs;
pub mod health;
pub mod send_enquiry;

/// Catch panics, log them and return the generic 500 error
pub fn panic_handler(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Error processing request: {details}");

    ApiError::internal().into_response()
}
