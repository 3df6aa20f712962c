//! Mailer port

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

mod errors;
mod message;

pub use errors::MailerError;
pub use message::Message;

/// Outbound mail transport
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Whether transport credentials are configured.
    ///
    /// A mailer without credentials never attempts a network call.
    fn has_credentials(&self) -> bool;

    /// Send an email
    ///
    /// # Arguments
    /// * `message` - The [`Message`] to deliver.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the transport accepted the message,
    /// or an [`Err`] containing a [`MailerError`] if the single delivery attempt failed.
    async fn send_email(&self, message: &Message) -> Result<(), MailerError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        fn has_credentials(&self) -> bool;
        async fn send_email(&self, message: &Message) -> Result<(), MailerError>;
    }
}
