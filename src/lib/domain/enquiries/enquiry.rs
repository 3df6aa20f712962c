//! Enquiry model

use super::errors::{EnquiryError, RequiredField};

/// Message used when the customer leaves the message field out
pub const DEFAULT_MESSAGE: &str = "No message provided";

/// A validated customer enquiry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enquiry {
    name: String,
    mobile: String,
    email: String,
    message: String,
}

impl Enquiry {
    /// Validates the raw form fields and creates an enquiry.
    ///
    /// Required fields are checked in the order name, mobile, email and the first
    /// missing or empty one is reported. An absent message is replaced with
    /// [`DEFAULT_MESSAGE`].
    pub fn new(
        name: Option<String>,
        mobile: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, EnquiryError> {
        let name = required(name, RequiredField::Name)?;
        let mobile = required(mobile, RequiredField::Mobile)?;
        let email = required(email, RequiredField::Email)?;

        Ok(Self {
            name,
            mobile,
            email,
            message: message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        })
    }

    /// The customer's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The customer's mobile number
    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    /// The customer's email address, as typed
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The enquiry message
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn required(value: Option<String>, field: RequiredField) -> Result<String, EnquiryError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(EnquiryError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_valid_enquiry() -> TestResult {
        let enquiry = Enquiry::new(
            some("Ravi"),
            some("9876543210"),
            some("ravi@example.com"),
            some("Need a quote for vitrified tiles"),
        )?;

        assert_eq!(enquiry.name(), "Ravi");
        assert_eq!(enquiry.mobile(), "9876543210");
        assert_eq!(enquiry.email(), "ravi@example.com");
        assert_eq!(enquiry.message(), "Need a quote for vitrified tiles");

        Ok(())
    }

    #[test]
    fn test_missing_message_uses_default() -> TestResult {
        let enquiry = Enquiry::new(some("Ravi"), some("98765"), some("ravi@example.com"), None)?;

        assert_eq!(enquiry.message(), DEFAULT_MESSAGE);

        Ok(())
    }

    #[test]
    fn test_empty_message_is_kept() -> TestResult {
        let enquiry = Enquiry::new(some("Ravi"), some("98765"), some("r@x.com"), some(""))?;

        assert_eq!(enquiry.message(), "");

        Ok(())
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        let cases = [
            ((None, None, None), RequiredField::Name),
            ((some(""), some("1"), some("a@b.c")), RequiredField::Name),
            ((some("Ravi"), None, None), RequiredField::Mobile),
            ((some("Ravi"), some(""), some("a@b.c")), RequiredField::Mobile),
            ((some("Ravi"), some("1"), None), RequiredField::Email),
            ((some("Ravi"), some("1"), some("")), RequiredField::Email),
        ];

        for ((name, mobile, email), field) in cases {
            let result = Enquiry::new(name, mobile, email, None);

            assert_eq!(result, Err(EnquiryError::MissingField(field)));
        }
    }

    #[test]
    fn test_whitespace_is_not_empty() -> TestResult {
        let enquiry = Enquiry::new(some(" "), some(" "), some(" "), None)?;

        assert_eq!(enquiry.name(), " ");

        Ok(())
    }
}
