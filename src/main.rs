use std::net::TcpListener;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{info, warn};

use polaris_webinar::config::{EmailSettings, ServerSettings, SessionCatalog};
use polaris_webinar::server;
use polaris_webinar::services::email::SmtpMailer;
use polaris_webinar::services::webinar::SignupService;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let email = EmailSettings::from_env()?;
    let bind = ServerSettings::from_env()?;
    let catalog = SessionCatalog::from_env();

    let mailer = SmtpMailer::new(&email)
        .with_context(|| format!("Failed to configure SMTP relay {}:{}", email.host, email.port))?;
    info!(
        "SMTP relay {}:{} (implicit TLS: {}), sending as {}",
        email.host, email.port, email.secure, email.from
    );
    if email.user.is_none() {
        warn!("EMAIL_USER not set, sending without SMTP authentication");
    }

    let signups = SignupService::new(Arc::new(mailer), email.from.clone());

    let listener = TcpListener::bind((bind.host.as_str(), bind.port))
        .with_context(|| format!("Failed to bind {}:{}", bind.host, bind.port))?;
    info!("Listening on http://{}:{}", bind.host, bind.port);
    if bind.is_wildcard() {
        match local_ip_address::local_ip() {
            Ok(ip) => info!("Reachable on the LAN at http://{}:{}", ip, bind.port),
            Err(e) => warn!("Could not determine local IP address: {}", e),
        }
    }
    info!("Session dates offered: {}", catalog.dates().join(", "));

    server::run(listener, signups, catalog)?
        .await
        .context("HTTP server stopped with an error")
}
