//! Enquiry email templates

pub mod new_enquiry;
