use super::IRoundRobinRepo;
use leadflow_domain::{Advisor, RoundRobinState};
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::warn;

/// Round robin state stored as a JSON file, so assignments keep
/// alternating across restarts
pub struct FileRoundRobinRepo {
    path: PathBuf,
    // Held while a turn is handed out
    lock: Mutex<()>,
}

impl FileRoundRobinRepo {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Written to a temp file next to the state file, then renamed over it
    async fn write(&self, state: &RoundRobinState) -> anyhow::Result<()> {
        let temp = self.temp_path();
        tokio::fs::write(&temp, serde_json::to_string_pretty(state)?).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        Ok(())
    }

    async fn read(&self) -> anyhow::Result<RoundRobinState> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RoundRobinState::default())
            }
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!(
                    "Round robin state at {:?} is corrupt, starting over. Error: {:?}",
                    self.path, e
                );
                Ok(RoundRobinState::default())
            }
        }
    }
}

#[async_trait::async_trait]
impl IRoundRobinRepo for FileRoundRobinRepo {
    async fn load(&self) -> anyhow::Result<RoundRobinState> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    async fn assign(&self, roster: &[Advisor]) -> anyhow::Result<Option<Advisor>> {
        let _guard = self.lock.lock().await;
        let mut state = self.read().await?;
        let advisor = state.assign(roster).cloned();
        if advisor.is_some() {
            self.write(&state).await?;
        }
        Ok(advisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadflow_domain::default_roster;

    fn state_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "leadflow_round_robin_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    #[tokio::test]
    async fn keeps_alternating_across_restarts() {
        let path = state_path("restarts");
        let _ = std::fs::remove_file(&path);
        let roster = default_roster();

        let repo = FileRoundRobinRepo::new(path.clone());
        assert_eq!(repo.assign(&roster).await.unwrap().unwrap().id, "david");

        let restarted = FileRoundRobinRepo::new(path.clone());
        assert_eq!(restarted.assign(&roster).await.unwrap().unwrap().id, "brennan");
        assert_eq!(restarted.assign(&roster).await.unwrap().unwrap().id, "david");

        let state = restarted.load().await.unwrap();
        assert_eq!(state.count_for("david"), 2);
        assert_eq!(state.count_for("brennan"), 1);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn state_is_replaced_through_a_temp_file() {
        let path = state_path("replace");
        let repo = FileRoundRobinRepo::new(path.clone());
        // Left behind by an interrupted write
        std::fs::write(repo.temp_path(), "{\"last_assig").unwrap();
        std::fs::write(
            &path,
            r#"{"last_assigned": "david", "assignment_count": {"david": 4}}"#,
        )
        .unwrap();

        assert_eq!(
            repo.assign(&default_roster()).await.unwrap().unwrap().id,
            "brennan"
        );
        assert!(!repo.temp_path().exists());

        let saved: RoundRobinState =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.last_assigned, Some("brennan".to_string()));
        assert_eq!(saved.count_for("david"), 4);
        assert_eq!(saved.count_for("brennan"), 1);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn corrupt_state_starts_over() {
        let path = state_path("corrupt");
        std::fs::write(&path, "{not json").unwrap();

        let repo = FileRoundRobinRepo::new(path.clone());
        assert_eq!(repo.load().await.unwrap(), RoundRobinState::default());
        assert_eq!(
            repo.assign(&default_roster()).await.unwrap().unwrap().id,
            "david"
        );

        let _ = std::fs::remove_file(&path);
    }
}
