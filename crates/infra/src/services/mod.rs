pub mod google_sheets;
pub mod mailer;
mod notifier;

use crate::config::Config;
use mailer::{DisabledMailer, IMailer, InMemoryMailer, SmtpMailer};
pub use notifier::{EmailNotifier, INotifier};
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub struct Services {
    pub mailer: Arc<dyn IMailer>,
    pub notifier: Arc<dyn INotifier>,
}

impl Services {
    fn with_mailer(mailer: Arc<dyn IMailer>) -> Self {
        Self {
            notifier: Arc::new(EmailNotifier::new(mailer.clone())),
            mailer,
        }
    }

    pub fn create(config: &Config) -> Self {
        let mailer: Arc<dyn IMailer> = match &config.smtp {
            Some(smtp) => match SmtpMailer::new(smtp) {
                Ok(mailer) => Arc::new(mailer),
                Err(e) => {
                    warn!("Unable to set up the SMTP transport. Error: {:?}", e);
                    Arc::new(DisabledMailer)
                }
            },
            None => Arc::new(DisabledMailer),
        };
        Self::with_mailer(mailer)
    }

    /// Services delivering every email to the given inmemory outbox
    pub fn create_inmemory(mailer: Arc<InMemoryMailer>) -> Self {
        Self::with_mailer(mailer)
    }
}
