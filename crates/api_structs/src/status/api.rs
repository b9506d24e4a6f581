use serde::{Deserialize, Serialize};

pub mod get_service_health {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub status: String,
        pub service: String,
    }
}

pub mod get_service_index {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct EndpointDTO {
        pub path: String,
        pub method: String,
        pub description: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub service: String,
        pub endpoints: Vec<EndpointDTO>,
    }
}
