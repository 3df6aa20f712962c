#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Contact form enquiry relay server

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use enquiry_relay::{
    domain::enquiries::{EnquiryConfig, EnquiryServiceImpl},
    infrastructure::{
        email::smtp::{SMTPConfig, SMTPMailer},
        http::{state::AppConfig, HttpServer, HttpServerConfig},
    },
};
use tracing::info;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The application configuration
    #[clap(flatten)]
    pub app: AppConfig,

    /// The SMTP relay configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,

    /// The enquiry configuration
    #[clap(flatten)]
    pub enquiries: EnquiryConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    info!("{}", "=".repeat(50));
    info!("{}", args.app.service_name);
    info!("Listening on port: {}", args.server.http_port);
    info!("SMTP Server: {}:{}", args.smtp.host, args.smtp.port);
    info!(
        "SMTP Username: {}",
        if args.smtp.username.is_empty() {
            "Not configured"
        } else {
            args.smtp.username.as_str()
        }
    );
    info!("Recipient: {}", args.enquiries.recipient);
    info!("{}", "=".repeat(50));

    let mailer = SMTPMailer::new(args.smtp);
    mailer.verify().await;

    let enquiries = EnquiryServiceImpl::new(args.enquiries, Arc::new(mailer));

    HttpServer::new(enquiries, args.app, args.server)
        .await?
        .run()
        .await
}
