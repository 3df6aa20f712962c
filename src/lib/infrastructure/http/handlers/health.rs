//! Health check handler

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{domain::enquiries::EnquiryService, infrastructure::http::state::AppState};

/// The health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `running`
    #[schema(example = "running")]
    pub status: String,

    /// The service name
    #[schema(example = "Shri Selvam Tiles Backend Server")]
    pub message: String,

    /// The current server time
    pub timestamp: DateTime<Utc>,
}

/// Report that the service is up
#[utoipa::path(
    get,
    operation_id = "health",
    tag = "System",
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse),
    )
)]
pub async fn handler<E: EnquiryService>(State(state): State<AppState<E>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running".to_string(),
        message: state.config.service_name.clone(),
        timestamp: Utc::now(),
    })
}
