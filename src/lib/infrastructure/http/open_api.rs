//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{
    errors::ErrorResponse,
    handlers::{health, send_enquiry},
};

/// OpenAPI document for the public endpoints
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Enquiry Relay"),
    paths(health::handler, send_enquiry::handler),
    components(schemas(
        health::HealthResponse,
        send_enquiry::SendEnquiryBody,
        send_enquiry::SendEnquiryResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
