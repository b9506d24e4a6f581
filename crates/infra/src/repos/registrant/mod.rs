mod inmemory;
mod sheets;

pub use inmemory::InMemoryRegistrantRepo;
use leadflow_domain::{NewRegistrant, Registrant, ReminderTier, RowId};
pub use sheets::SheetsRegistrantRepo;

/// Append-only store of webinar registrants
#[async_trait::async_trait]
pub trait IRegistrantRepo: Send + Sync {
    async fn insert(&self, registrant: &NewRegistrant) -> anyhow::Result<RowId>;
    /// Every registrant in storage order
    async fn find_all(&self) -> anyhow::Result<Vec<Registrant>>;
    /// Records that the email for `tier` was sent at `timestamp`
    async fn mark_sent(&self, row: RowId, tier: ReminderTier, timestamp: &str)
        -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::LeadflowContext;
    use leadflow_domain::{NewRegistrant, ReminderTier, RowId, WEBINAR_REGISTRATION_SOURCE};

    fn new_registrant(email: &str) -> NewRegistrant {
        NewRegistrant {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: email.into(),
            agency: "NASA".into(),
            submitted_at: "2025-12-20T10:00:00Z".into(),
            source: WEBINAR_REGISTRATION_SOURCE.into(),
            webinar_id: "dec-30-2025".into(),
            webinar_date: "2025-12-30T11:00:00-05:00".into(),
        }
    }

    #[tokio::test]
    async fn insert_and_find_in_storage_order() {
        let ctx = LeadflowContext::create_inmemory();
        let repo = &ctx.repos.registrants;

        assert_eq!(repo.insert(&new_registrant("a@x.com")).await.unwrap(), RowId(2));
        assert_eq!(repo.insert(&new_registrant("b@x.com")).await.unwrap(), RowId(3));

        let registrants = repo.find_all().await.unwrap();
        assert_eq!(registrants.len(), 2);
        assert_eq!(registrants[0].email, "a@x.com");
        assert_eq!(registrants[1].row, RowId(3));
        assert!(!registrants[1].sent.is_sent(ReminderTier::Confirmation));
    }

    #[tokio::test]
    async fn mark_sent_never_overwrites() {
        let ctx = LeadflowContext::create_inmemory();
        let repo = &ctx.repos.registrants;
        let row = repo.insert(&new_registrant("a@x.com")).await.unwrap();

        repo.mark_sent(row, ReminderTier::ThreeDay, "2025-12-28T14:05:00Z")
            .await
            .unwrap();
        repo.mark_sent(row, ReminderTier::ThreeDay, "2025-12-28T15:05:00Z")
            .await
            .unwrap();

        let registrant = repo.find_all().await.unwrap().remove(0);
        assert_eq!(
            registrant.sent.sent_at(ReminderTier::ThreeDay),
            Some("2025-12-28T14:05:00Z")
        );
        assert!(!registrant.sent.is_sent(ReminderTier::OneDay));
    }

    #[tokio::test]
    async fn mark_sent_for_unknown_row_fails() {
        let ctx = LeadflowContext::create_inmemory();
        assert!(ctx
            .repos
            .registrants
            .mark_sent(RowId(40), ReminderTier::DayOf, "2025-12-30T14:05:00Z")
            .await
            .is_err());
    }
}
