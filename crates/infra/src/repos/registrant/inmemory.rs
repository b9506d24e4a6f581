use super::IRegistrantRepo;
use crate::repos::shared::inmemory_repo::*;
use leadflow_domain::{NewRegistrant, Registrant, ReminderTier, RowId};

pub struct InMemoryRegistrantRepo {
    registrants: std::sync::Mutex<Vec<Registrant>>,
}

impl InMemoryRegistrantRepo {
    pub fn new() -> Self {
        Self {
            registrants: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IRegistrantRepo for InMemoryRegistrantRepo {
    async fn insert(&self, registrant: &NewRegistrant) -> anyhow::Result<RowId> {
        Ok(insert_with_row(&self.registrants, |row| {
            registrant.clone().into_registrant(row)
        }))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Registrant>> {
        Ok(find_all(&self.registrants))
    }

    async fn mark_sent(
        &self,
        row: RowId,
        tier: ReminderTier,
        timestamp: &str,
    ) -> anyhow::Result<()> {
        let found = update_by(
            &self.registrants,
            |r| r.row == row,
            |r| {
                r.sent.mark(tier, timestamp.to_string());
            },
        );
        if !found {
            return Err(anyhow::anyhow!("No registrant at row {}", row));
        }
        Ok(())
    }
}
