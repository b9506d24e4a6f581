use super::ICallBookingRepo;
use crate::repos::shared::inmemory_repo::*;
use leadflow_domain::CallBookingLogEntry;

pub struct InMemoryCallBookingRepo {
    entries: std::sync::Mutex<Vec<CallBookingLogEntry>>,
}

impl InMemoryCallBookingRepo {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICallBookingRepo for InMemoryCallBookingRepo {
    async fn insert(&self, entry: &CallBookingLogEntry) -> anyhow::Result<()> {
        insert(entry, &self.entries);
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<CallBookingLogEntry>> {
        Ok(find_all(&self.entries))
    }
}
