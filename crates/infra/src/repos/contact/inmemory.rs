use super::IContactRepo;
use crate::repos::shared::inmemory_repo::*;
use leadflow_domain::{ContactSubmission, RowId};

pub struct InMemoryContactRepo {
    submissions: std::sync::Mutex<Vec<ContactSubmission>>,
}

impl InMemoryContactRepo {
    pub fn new() -> Self {
        Self {
            submissions: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IContactRepo for InMemoryContactRepo {
    async fn insert(&self, submission: &ContactSubmission) -> anyhow::Result<RowId> {
        Ok(insert_with_row(&self.submissions, |_| submission.clone()))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ContactSubmission>> {
        Ok(find_all(&self.submissions))
    }
}
