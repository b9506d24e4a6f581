use crate::base::{APIResponse, BaseClient};
use leadflow_api_structs::{get_service_health, get_service_index};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct StatusClient {
    base: Arc<BaseClient>,
}

impl StatusClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn check_health(&self) -> APIResponse<get_service_health::APIResponse> {
        self.base.get("health", StatusCode::OK).await
    }

    pub async fn index(&self) -> APIResponse<get_service_index::APIResponse> {
        self.base.get("", StatusCode::OK).await
    }
}
