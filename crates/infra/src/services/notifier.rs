use super::mailer::IMailer;
use leadflow_domain::{EmailContent, ReminderTier, TemplateContext};
use std::sync::Arc;
use tracing::{error, info};

/// Sends the webinar nurture emails
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    /// Returns `true` only when the email for `tier` was accepted for delivery
    async fn send(&self, tier: ReminderTier, recipient: &str, ctx: &TemplateContext) -> bool;
}

pub struct EmailNotifier {
    mailer: Arc<dyn IMailer>,
}

impl EmailNotifier {
    pub fn new(mailer: Arc<dyn IMailer>) -> Self {
        Self { mailer }
    }
}

#[async_trait::async_trait]
impl INotifier for EmailNotifier {
    async fn send(&self, tier: ReminderTier, recipient: &str, ctx: &TemplateContext) -> bool {
        let email = EmailContent::for_tier(tier, ctx);
        match self.mailer.send(recipient, &email).await {
            Ok(()) => {
                info!("Sent {} email to {}", tier, recipient);
                true
            }
            Err(e) => {
                error!("Failed to send {} email to {}. Error: {:?}", tier, recipient, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mailer::InMemoryMailer;

    fn ctx() -> TemplateContext {
        TemplateContext {
            first_name: "Ada".into(),
            webinar_date: "Tuesday, December 30".into(),
            timezone: "EST".into(),
            join_link: "https://zoom.us/j/1".into(),
        }
    }

    #[tokio::test]
    async fn reports_delivery_outcome() {
        let mailer = Arc::new(InMemoryMailer::new());
        let notifier = EmailNotifier::new(mailer.clone());

        assert!(notifier.send(ReminderTier::OneDay, "a@x.com", &ctx()).await);
        let sent = mailer.sent_to("a@x.com");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email.subject, "Tomorrow: Your FERS Workshop + Zoom Link");

        mailer.fail_for("b@x.com");
        assert!(!notifier.send(ReminderTier::OneDay, "b@x.com", &ctx()).await);
        assert!(mailer.sent_to("b@x.com").is_empty());
    }
}
