//! SMTP email service implementation

use async_trait::async_trait;
use clap::{ArgAction, Parser};
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message as Email, Tokio1Executor,
};
use tracing::{debug, info, warn};

use crate::domain::communication::mailer::{Mailer, MailerError, Message};

/// SMTP configuration
#[derive(Clone, Debug, Parser)]
pub struct SMTPConfig {
    /// The SMTP host
    #[clap(long = "smtp-server", env = "SMTP_SERVER", default_value = "smtp.gmail.com")]
    pub host: String,

    /// The SMTP port
    #[clap(long = "smtp-port", env = "SMTP_PORT", default_value = "587")]
    pub port: u16,

    /// The SMTP username, leave empty to log enquiries instead of sending them
    #[clap(long = "smtp-username", env = "SMTP_USERNAME", default_value = "")]
    pub username: String,

    /// The SMTP password, leave empty to log enquiries instead of sending them
    #[clap(
        long = "smtp-password",
        env = "SMTP_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// The sender mailbox, defaults to the SMTP username
    #[clap(long = "smtp-sender", env = "SMTP_SENDER")]
    pub sender: Option<String>,

    /// Enable STARTTLS (TLS upgrade on connection), otherwise connect with implicit TLS
    #[clap(
        long = "smtp-starttls",
        env = "SMTP_STARTTLS",
        default_value = "true",
        action = ArgAction::Set
    )]
    pub starttls: bool,

    /// Verify the TLS certificate
    #[clap(
        long = "smtp-verify-tls",
        env = "SMTP_VERIFY_TLS",
        default_value = "true",
        action = ArgAction::Set
    )]
    pub verify_tls: bool,
}

impl SMTPConfig {
    /// Whether both username and password are set
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    fn sender(&self) -> &str {
        self.sender.as_deref().unwrap_or(&self.username)
    }
}

/// SMTP mailer
#[derive(Debug, Clone)]
pub struct SMTPMailer {
    config: SMTPConfig,
}

impl SMTPMailer {
    /// Create a new SMTP mailer
    pub fn new(config: SMTPConfig) -> Self {
        Self { config }
    }

    /// Build a transport for a single delivery attempt
    pub fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailerError> {
        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());

        let parameters = TlsParameters::builder(self.config.host.clone())
            .dangerous_accept_invalid_certs(!self.config.verify_tls)
            .build()?;

        let (relay, tls) = if self.config.starttls {
            (
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?,
                Tls::Required(parameters),
            )
        } else {
            (
                AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)?,
                Tls::Wrapper(parameters),
            )
        };

        Ok(relay
            .credentials(creds)
            .port(self.config.port)
            .tls(tls)
            .build())
    }

    /// Check that the SMTP server accepts connections.
    ///
    /// Only logs the outcome; an unreachable server does not stop the application.
    #[mutants::skip]
    pub async fn verify(&self) {
        if !self.has_credentials() {
            warn!("SMTP credentials not configured, enquiries will be logged instead of sent");
            return;
        }

        let result = match self.transport() {
            Ok(transport) => transport.test_connection().await.map_err(MailerError::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(true) => info!("Email server is ready to send messages"),
            Ok(false) => warn!("Email server did not accept the connection"),
            Err(e) => warn!("Email configuration error: {e}"),
        }
    }

    fn build_email(&self, message: &Message) -> Result<Email, MailerError> {
        let from: Mailbox = self.config.sender().parse()?;
        let to: Mailbox = message.to.to_string().parse()?;

        Ok(Email::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                message.plain_body.clone(),
                message.html_body.clone(),
            ))?)
    }
}

#[async_trait]
impl Mailer for SMTPMailer {
    fn has_credentials(&self) -> bool {
        self.config.has_credentials()
    }

    async fn send_email(&self, message: &Message) -> Result<(), MailerError> {
        let email = self.build_email(message)?;

        debug!(
            "sending \"{}\" via {}:{}",
            message.subject, self.config.host, self.config.port
        );

        self.transport()?.send(email).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::communication::email_address::EmailAddress;

    use super::*;

    fn config() -> SMTPConfig {
        SMTPConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            username: "shop@example.com".to_string(),
            password: "app-password".to_string(),
            sender: None,
            starttls: false,
            verify_tls: true,
        }
    }

    fn message() -> Message {
        Message {
            to: EmailAddress::new("info@shriselvamtiles.com").expect("valid email"),
            subject: "New Enquiry from Ravi - Shri Selvam Tiles".to_string(),
            html_body: "<p>Ravi</p>".to_string(),
            plain_body: "Ravi".to_string(),
        }
    }

    #[test]
    fn test_has_credentials() {
        assert!(SMTPMailer::new(config()).has_credentials());

        let no_user = SMTPConfig {
            username: String::new(),
            ..config()
        };
        assert!(!SMTPMailer::new(no_user).has_credentials());

        let no_password = SMTPConfig {
            password: String::new(),
            ..config()
        };
        assert!(!SMTPMailer::new(no_password).has_credentials());
    }

    #[test]
    fn test_sender_defaults_to_username() -> TestResult {
        let email = SMTPMailer::new(config()).build_email(&message())?;
        let headers = email.headers().to_string();

        assert!(headers.contains("From: shop@example.com"));
        assert!(headers.contains("To: info@shriselvamtiles.com"));

        Ok(())
    }

    #[test]
    fn test_sender_override() -> TestResult {
        let config = SMTPConfig {
            sender: Some("website@shriselvamtiles.com".to_string()),
            ..config()
        };

        let email = SMTPMailer::new(config).build_email(&message())?;

        assert!(email
            .headers()
            .to_string()
            .contains("From: website@shriselvamtiles.com"));

        Ok(())
    }

    #[test]
    fn test_invalid_sender() {
        let config = SMTPConfig {
            username: "not a mailbox".to_string(),
            ..config()
        };

        let result = SMTPMailer::new(config).build_email(&message());

        assert!(matches!(result, Err(MailerError::InvalidEmail)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_send_error() {
        let result = SMTPMailer::new(config()).send_email(&message()).await;

        assert!(matches!(result, Err(MailerError::SendError(_))));
    }
}
