//! Enquiry service

use std::sync::Arc;

use askama::Template;
use async_trait::async_trait;
use chrono::Local;
use clap::Parser;
use tracing::{error, info, warn};

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    communication::{
        email_address::EmailAddress,
        mailer::{Mailer, Message},
    },
    enquiries::{emails::new_enquiry::NewEnquiryTemplate, Enquiry, SendEnquiryError},
};

/// Enquiry configuration
#[derive(Clone, Debug, Parser)]
pub struct EnquiryConfig {
    /// The mailbox that receives enquiry notifications
    #[clap(
        long = "recipient-email",
        env = "RECIPIENT_EMAIL",
        default_value = "info@shriselvamtiles.com"
    )]
    pub recipient: EmailAddress,
}

/// Enquiry service
#[async_trait]
pub trait EnquiryService: Clone + Send + Sync + 'static {
    /// Relays an enquiry to the configured recipient.
    ///
    /// # Arguments
    /// * `enquiry` - The validated [`Enquiry`] to relay.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] if the notification was delivered, or skipped because no
    /// transport credentials are configured, or an [`Err`] containing a [`SendEnquiryError`].
    async fn send_enquiry(&self, enquiry: &Enquiry) -> Result<(), SendEnquiryError>;
}

#[cfg(test)]
mock! {
    pub EnquiryService {}

    impl Clone for EnquiryService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl EnquiryService for EnquiryService {
        async fn send_enquiry(&self, enquiry: &Enquiry) -> Result<(), SendEnquiryError>;
    }
}

/// Enquiry service implementation
#[derive(Debug, Clone)]
pub struct EnquiryServiceImpl<M>
where
    M: Mailer,
{
    config: EnquiryConfig,
    mailer: Arc<M>,
}

impl<M> EnquiryServiceImpl<M>
where
    M: Mailer,
{
    /// Creates a new enquiry service.
    pub fn new(config: EnquiryConfig, mailer: Arc<M>) -> Self {
        Self { config, mailer }
    }

    fn notification(&self, enquiry: &Enquiry) -> Result<Message, SendEnquiryError> {
        let template = NewEnquiryTemplate::new(enquiry, Local::now().naive_local());

        Ok(Message {
            to: self.config.recipient.clone(),
            subject: template.subject(),
            html_body: css_inline::inline(&template.render()?)?,
            plain_body: template.render_plain(),
        })
    }
}

#[async_trait]
impl<M> EnquiryService for EnquiryServiceImpl<M>
where
    M: Mailer,
{
    async fn send_enquiry(&self, enquiry: &Enquiry) -> Result<(), SendEnquiryError> {
        let message = self.notification(enquiry)?;

        if !self.mailer.has_credentials() {
            warn!("SMTP credentials not configured, email not sent");
            info!(
                name = enquiry.name(),
                mobile = enquiry.mobile(),
                email = enquiry.email(),
                "enquiry details"
            );

            return Ok(());
        }

        if let Err(err) = self.mailer.send_email(&message).await {
            error!("Error sending enquiry email: {err}");

            return Err(err.into());
        }

        info!("Enquiry email sent to {}", message.to);

        Ok(())
    }
}
