use serde::{Deserialize, Serialize};

pub mod submit_contact_form {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub first_name: String,
        #[serde(default)]
        pub last_name: String,
        #[serde(default)]
        pub email: String,
        #[serde(default)]
        pub phone: String,
        #[serde(default)]
        pub message: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
        pub message: String,
    }

    impl APIResponse {
        pub fn new() -> Self {
            Self {
                success: true,
                message: "Contact form received".into(),
            }
        }
    }

    impl Default for APIResponse {
        fn default() -> Self {
            Self::new()
        }
    }
}
