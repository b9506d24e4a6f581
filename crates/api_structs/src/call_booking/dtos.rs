use leadflow_domain::Advisor;
use serde::{Deserialize, Serialize};

/// Public profile of the advisor a prospect was matched with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorDTO {
    pub name: String,
    pub title: String,
    pub bio: String,
}

impl AdvisorDTO {
    pub fn new(advisor: &Advisor) -> Self {
        Self {
            name: advisor.name.clone(),
            title: advisor.title.clone(),
            bio: advisor.bio.clone(),
        }
    }
}
