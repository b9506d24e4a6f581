mod inmemory;
mod sheets;

pub use inmemory::InMemoryContactRepo;
use leadflow_domain::{ContactSubmission, RowId};
pub use sheets::SheetsContactRepo;

#[async_trait::async_trait]
pub trait IContactRepo: Send + Sync {
    async fn insert(&self, submission: &ContactSubmission) -> anyhow::Result<RowId>;
    async fn find_all(&self) -> anyhow::Result<Vec<ContactSubmission>>;
}

#[cfg(test)]
mod tests {
    use crate::LeadflowContext;
    use leadflow_domain::{ContactSubmission, RowId, CONTACT_FORM_SOURCE};

    #[tokio::test]
    async fn insert_and_find() {
        let ctx = LeadflowContext::create_inmemory();
        let submission = ContactSubmission {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@navy.mil".into(),
            phone: "555-0100".into(),
            message: "When can I retire?".into(),
            submitted_at: "2026-01-05T14:05:00Z".into(),
            source: CONTACT_FORM_SOURCE.into(),
        };

        assert_eq!(ctx.repos.contacts.insert(&submission).await.unwrap(), RowId(2));
        assert_eq!(ctx.repos.contacts.find_all().await.unwrap(), vec![submission]);
    }
}
