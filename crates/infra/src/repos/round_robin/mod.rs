mod file;
mod inmemory;

pub use file::FileRoundRobinRepo;
pub use inmemory::InMemoryRoundRobinRepo;
use leadflow_domain::{Advisor, RoundRobinState};

/// Persists the round robin state of the call booking assignment
#[async_trait::async_trait]
pub trait IRoundRobinRepo: Send + Sync {
    async fn load(&self) -> anyhow::Result<RoundRobinState>;
    /// Assigns the next advisor of `roster` and persists the new state.
    /// Concurrent calls never hand out the same turn twice.
    async fn assign(&self, roster: &[Advisor]) -> anyhow::Result<Option<Advisor>>;
}
