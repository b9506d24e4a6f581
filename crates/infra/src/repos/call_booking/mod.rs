mod inmemory;
mod sheets;

pub use inmemory::InMemoryCallBookingRepo;
use leadflow_domain::CallBookingLogEntry;
pub use sheets::SheetsCallBookingRepo;

/// Log of every call booking submission, qualified or not
#[async_trait::async_trait]
pub trait ICallBookingRepo: Send + Sync {
    async fn insert(&self, entry: &CallBookingLogEntry) -> anyhow::Result<()>;
    async fn find_all(&self) -> anyhow::Result<Vec<CallBookingLogEntry>>;
}
