//! Enquiry errors

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::domain::communication::mailer::MailerError;

/// A form field that must be present and non-empty
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    /// Customer name
    Name,

    /// Customer mobile number
    Mobile,

    /// Customer email address
    Email,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "Name",
            Self::Mobile => "Mobile",
            Self::Email => "Email",
        };

        write!(f, "{label}")
    }
}

/// Errors raised while validating an enquiry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnquiryError {
    /// A required field is missing or empty
    #[error("{0} is required")]
    MissingField(RequiredField),
}

/// Errors raised while relaying an enquiry
#[derive(Debug, Error)]
pub enum SendEnquiryError {
    /// The delivery attempt failed
    #[error("could not deliver enquiry email")]
    DeliveryFailed,

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<MailerError> for SendEnquiryError {
    fn from(err: MailerError) -> Self {
        debug!("MailerError -> SendEnquiryError: {err}");

        SendEnquiryError::DeliveryFailed
    }
}

impl From<askama::Error> for SendEnquiryError {
    fn from(err: askama::Error) -> Self {
        debug!("askama::Error -> SendEnquiryError");

        SendEnquiryError::UnknownError(anyhow::anyhow!("failed to render enquiry email: {err}"))
    }
}

impl From<css_inline::InlineError> for SendEnquiryError {
    fn from(err: css_inline::InlineError) -> Self {
        debug!("InlineError -> SendEnquiryError");

        SendEnquiryError::UnknownError(anyhow::anyhow!("failed to inline email CSS: {err}"))
    }
}
