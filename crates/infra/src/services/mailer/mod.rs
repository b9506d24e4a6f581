mod inmemory;
mod smtp;

pub use inmemory::{InMemoryMailer, SentEmail};
use leadflow_domain::EmailContent;
pub use smtp::SmtpMailer;
use tracing::warn;

#[async_trait::async_trait]
pub trait IMailer: Send + Sync {
    /// Delivers `email` to `to`. An `Ok` means the email was accepted
    /// for delivery.
    async fn send(&self, to: &str, email: &EmailContent) -> anyhow::Result<()>;
}

/// Used when no SMTP credentials are configured. Every send fails so that
/// nothing is marked as sent.
pub struct DisabledMailer;

#[async_trait::async_trait]
impl IMailer for DisabledMailer {
    async fn send(&self, to: &str, email: &EmailContent) -> anyhow::Result<()> {
        warn!(
            "SMTP credentials not configured. Email not sent. Would have sent to: {}, subject: {}",
            to, email.subject
        );
        Err(anyhow::anyhow!("SMTP credentials not configured"))
    }
}
