//! New enquiry notification template

use askama::Template;
use chrono::NaiveDateTime;

use crate::domain::enquiries::Enquiry;

/// Notification sent to the shop mailbox for every enquiry
#[derive(Debug, Template)]
#[template(path = "emails/enquiries/new_enquiry.html")]
pub struct NewEnquiryTemplate<'a> {
    /// Customer name
    pub name: &'a str,

    /// Customer mobile number
    pub mobile: &'a str,

    /// Customer email address
    pub email: &'a str,

    /// Enquiry message
    pub message: &'a str,

    /// When the enquiry reached the server, already formatted
    pub received_on: String,
}

impl<'a> NewEnquiryTemplate<'a> {
    /// Creates a new `NewEnquiryTemplate`
    pub fn new(enquiry: &'a Enquiry, received_at: NaiveDateTime) -> Self {
        Self {
            name: enquiry.name(),
            mobile: enquiry.mobile(),
            email: enquiry.email(),
            message: enquiry.message(),
            received_on: received_at.format("%d %B %Y at %I:%M %p").to_string(),
        }
    }

    /// The email subject line
    pub fn subject(&self) -> String {
        format!("New Enquiry from {} - Shri Selvam Tiles", self.name)
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> String {
        format!(
            "New Customer Enquiry\n\
             \n\
             Name: {name}\n\
             Mobile: {mobile}\n\
             Email: {email}\n\
             Message: {message}\n\
             Received On: {received_on}\n\
             \n\
             This email was sent from the Shri Selvam Tiles website contact form.\n",
            name = self.name,
            mobile = self.mobile,
            email = self.email,
            message = self.message,
            received_on = self.received_on,
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use testresult::TestResult;

    use super::*;

    fn received_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|date| date.and_hms_opt(14, 30, 0))
            .expect("valid date")
    }

    fn enquiry(name: &str, message: Option<&str>) -> Enquiry {
        Enquiry::new(
            Some(name.to_string()),
            Some("9876543210".to_string()),
            Some("ravi@example.com".to_string()),
            message.map(str::to_string),
        )
        .expect("valid enquiry")
    }

    #[test]
    fn test_received_on_format() {
        let enquiry = enquiry("Ravi", None);
        let template = NewEnquiryTemplate::new(&enquiry, received_at());

        assert_eq!(template.received_on, "05 March 2024 at 02:30 PM");
    }

    #[test]
    fn test_subject() {
        let enquiry = enquiry("Ravi", None);
        let template = NewEnquiryTemplate::new(&enquiry, received_at());

        assert_eq!(template.subject(), "New Enquiry from Ravi - Shri Selvam Tiles");
    }

    #[test]
    fn test_html_contains_all_fields() -> TestResult {
        let enquiry = enquiry("Ravi", None);
        let html = NewEnquiryTemplate::new(&enquiry, received_at()).render()?;

        assert!(html.contains("New Customer Enquiry"));
        assert!(html.contains("Ravi"));
        assert!(html.contains("9876543210"));
        assert!(html.contains("ravi@example.com"));
        assert!(html.contains("No message provided"));
        assert!(html.contains("05 March 2024 at 02:30 PM"));

        Ok(())
    }

    #[test]
    fn test_html_escapes_customer_input() -> TestResult {
        let enquiry = enquiry("<script>alert(1)</script>", Some("Tiles & granite"));
        let html = NewEnquiryTemplate::new(&enquiry, received_at()).render()?;

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tiles &amp; granite"));

        Ok(())
    }

    #[test]
    fn test_plain_text_body() {
        let enquiry = enquiry("Ravi", Some("Call me after 6"));
        let plain = NewEnquiryTemplate::new(&enquiry, received_at()).render_plain();

        assert!(plain.contains("Name: Ravi\n"));
        assert!(plain.contains("Message: Call me after 6\n"));
        assert!(plain.contains("Received On: 05 March 2024 at 02:30 PM\n"));
    }
}
