use super::IMailer;
use leadflow_domain::EmailContent;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub to: String,
    pub email: EmailContent,
}

/// Mailer keeping every email in an outbox instead of delivering it.
/// Recipients added with `fail_for` get a send error.
pub struct InMemoryMailer {
    outbox: Mutex<Vec<SentEmail>>,
    failing_recipients: Mutex<Vec<String>>,
}

impl InMemoryMailer {
    pub fn new() -> Self {
        Self {
            outbox: Mutex::new(Vec::new()),
            failing_recipients: Mutex::new(Vec::new()),
        }
    }

    pub fn outbox(&self) -> Vec<SentEmail> {
        self.outbox.lock().unwrap().clone()
    }

    pub fn sent_to(&self, to: &str) -> Vec<SentEmail> {
        self.outbox()
            .into_iter()
            .filter(|sent| sent.to == to)
            .collect()
    }

    pub fn fail_for(&self, to: &str) {
        self.failing_recipients.lock().unwrap().push(to.to_string());
    }

    pub fn recover(&self, to: &str) {
        self.failing_recipients.lock().unwrap().retain(|r| r != to);
    }
}

impl Default for InMemoryMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMailer for InMemoryMailer {
    async fn send(&self, to: &str, email: &EmailContent) -> anyhow::Result<()> {
        if self.failing_recipients.lock().unwrap().iter().any(|r| r == to) {
            return Err(anyhow::anyhow!("Mailbox unavailable: {}", to));
        }
        self.outbox.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            email: email.clone(),
        });
        Ok(())
    }
}
