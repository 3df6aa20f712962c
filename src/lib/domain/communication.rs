//! Outbound communication module

pub mod email_address;
pub mod mailer;
