use crate::dtos::AdvisorDTO;
use serde::{Deserialize, Serialize};

pub mod book_call {
    use super::*;

    /// Screening answers are `"yes"` or `"no"`
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub name: String,
        #[serde(default)]
        pub email: String,
        #[serde(default)]
        pub phone: String,
        #[serde(default)]
        pub topic: String,
        #[serde(default)]
        pub is_federal_employee: String,
        #[serde(default)]
        pub wants_advisor: String,
        #[serde(default)]
        pub single_question: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub advisor: Option<AdvisorDTO>,
        /// Page the prospect should be sent to instead
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub redirect: Option<String>,
        pub message: String,
    }

    impl APIResponse {
        pub fn matched(advisor: AdvisorDTO) -> Self {
            Self {
                success: true,
                message: format!("You've been matched with {}!", advisor.name),
                advisor: Some(advisor),
                redirect: None,
            }
        }

        pub fn rejected(message: String, redirect: Option<String>) -> Self {
            Self {
                success: false,
                advisor: None,
                redirect,
                message,
            }
        }
    }
}
