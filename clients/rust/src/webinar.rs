use crate::base::{APIResponse, BaseClient};
use leadflow_api_structs::register_for_webinar;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct WebinarClient {
    base: Arc<BaseClient>,
}

pub struct RegisterForWebinarInput {
    /// Full name as typed into the form
    pub name: String,
    pub email: String,
    pub agency: Option<String>,
    pub webinar_id: String,
    pub webinar_date: String,
}

impl WebinarClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn register(
        &self,
        input: RegisterForWebinarInput,
    ) -> APIResponse<register_for_webinar::APIResponse> {
        let body = register_for_webinar::RequestBody {
            name: input.name,
            email: input.email,
            agency: input.agency,
            webinar_id: input.webinar_id,
            webinar_date: input.webinar_date,
        };
        self.base.post(body, "api/webinar", StatusCode::OK).await
    }
}
