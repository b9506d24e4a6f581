use serde::{Deserialize, Serialize};

pub mod register_for_webinar {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub name: String,
        #[serde(default)]
        pub email: String,
        #[serde(default)]
        pub agency: Option<String>,
        #[serde(default)]
        pub webinar_id: String,
        /// ISO 8601 datetime, with or without offset
        #[serde(default)]
        pub webinar_date: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
        pub email_sent: bool,
    }

    impl APIResponse {
        pub fn new(email_sent: bool) -> Self {
            Self {
                success: true,
                message: "Registration received".into(),
                email_sent,
            }
        }
    }
}
