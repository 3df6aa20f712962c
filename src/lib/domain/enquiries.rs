//! Enquiries module

pub mod emails;
mod enquiry;
mod errors;
mod service;

pub use enquiry::{Enquiry, DEFAULT_MESSAGE};
pub use errors::{EnquiryError, RequiredField, SendEnquiryError};
pub use service::{EnquiryConfig, EnquiryService, EnquiryServiceImpl};
