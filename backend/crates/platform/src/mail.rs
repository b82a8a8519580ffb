//! Outbound Mail Delivery
//!
//! SMTP delivery via lettre when configured, log-only delivery
//! otherwise. SMTP settings come from environment variables
//! (`SMTP_HOST`, `SMTP_PORT`, `SMTP_USER`, `SMTP_PASS`, `SMTP_FROM`).

use std::env;

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType, transport::smtp::authentication::Credentials,
};
use thiserror::Error;

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    BuildFailed(String),

    #[error("SMTP transport error: {0}")]
    TransportFailed(String),
}

/// Outbound mail sender abstraction
#[trait_variant::make(MailSender: Send)]
pub trait LocalMailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

/// SMTP configuration from environment
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    pub smtp_from: String,
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self {
            smtp_host: env::var("SMTP_HOST").ok(),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            smtp_user: env::var("SMTP_USER").ok(),
            smtp_pass: env::var("SMTP_PASS").ok(),
            smtp_from: env::var("SMTP_FROM").unwrap_or_else(|_| "noreply@example.com".to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.smtp_host.is_some()
    }
}

/// SMTP-backed mail sender
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let host = config
            .smtp_host
            .as_deref()
            .ok_or_else(|| MailError::TransportFailed("SMTP_HOST not set".to_string()))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| MailError::TransportFailed(e.to_string()))?
            .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_pass) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from: config.smtp_from.clone(),
        })
    }
}

impl MailSender for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|_| MailError::InvalidAddress(self.from.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| MailError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| MailError::BuildFailed(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::TransportFailed(e.to_string()))?;

        tracing::info!(to = %to, subject = %subject, "Mail sent");
        Ok(())
    }
}

/// Development mail sender: logs the mail instead of sending it
pub struct LogMailer;

impl MailSender for LogMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        tracing::info!(
            "=== MAIL (not sent) ===\nTo: {}\nSubject: {}\nBody:\n{}\n=======================",
            to,
            subject,
            body
        );
        Ok(())
    }
}

/// Either SMTP or log-only delivery, chosen from the environment.
pub enum Mailer {
    Smtp(SmtpMailer),
    Log(LogMailer),
}

impl Mailer {
    /// Build from `MailConfig::from_env()`. Falls back to log-only
    /// delivery when SMTP is not configured or the transport cannot
    /// be constructed.
    pub fn from_env() -> Self {
        let config = MailConfig::from_env();
        if config.is_configured() {
            match SmtpMailer::new(&config) {
                Ok(mailer) => return Self::Smtp(mailer),
                Err(e) => {
                    tracing::warn!(error = %e, "SMTP transport setup failed, logging mail instead");
                }
            }
        } else {
            tracing::warn!("SMTP not configured, mail will be logged instead of sent");
        }
        Self::Log(LogMailer)
    }
}

impl MailSender for Mailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        match self {
            Mailer::Smtp(m) => MailSender::send(m, to, subject, body).await,
            Mailer::Log(m) => MailSender::send(m, to, subject, body).await,
        }
    }
}
