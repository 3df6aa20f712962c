//! Application state module

use std::{fmt, sync::Arc};

use clap::Parser;

use crate::domain::enquiries::EnquiryService;

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
pub struct AppConfig {
    /// The name reported by the health check
    #[clap(
        long,
        env = "SERVICE_NAME",
        default_value = "Shri Selvam Tiles Backend Server"
    )]
    pub service_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "Shri Selvam Tiles Backend Server".to_string(),
        }
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState<E: EnquiryService> {
    /// The application configuration
    pub config: AppConfig,

    /// Enquiry service
    pub enquiries: Arc<E>,
}

impl<E: EnquiryService> AppState<E> {
    /// Create a new application state
    pub fn new(config: AppConfig, enquiries: E) -> Self {
        Self {
            config,
            enquiries: Arc::new(enquiries),
        }
    }
}

impl<E: EnquiryService> fmt::Debug for AppState<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("enquiries", &"EnquiryService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::enquiries::tests::MockEnquiryService;

/// State backed by a mocked enquiry service
#[cfg(test)]
pub fn test_state(enquiries: Option<MockEnquiryService>) -> AppState<MockEnquiryService> {
    AppState::new(
        AppConfig::default(),
        enquiries.unwrap_or_else(MockEnquiryService::new),
    )
}
