use super::IRoundRobinRepo;
use leadflow_domain::{Advisor, RoundRobinState};
use std::sync::Mutex;

pub struct InMemoryRoundRobinRepo {
    state: Mutex<RoundRobinState>,
}

impl InMemoryRoundRobinRepo {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RoundRobinState::default()),
        }
    }
}

#[async_trait::async_trait]
impl IRoundRobinRepo for InMemoryRoundRobinRepo {
    async fn load(&self) -> anyhow::Result<RoundRobinState> {
        Ok(self.state.lock().unwrap().clone())
    }

    async fn assign(&self, roster: &[Advisor]) -> anyhow::Result<Option<Advisor>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.assign(roster).cloned())
    }
}
