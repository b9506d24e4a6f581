use crate::base::{APIResponse, BaseClient};
use leadflow_api_structs::submit_contact_form;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ContactClient {
    base: Arc<BaseClient>,
}

pub struct SubmitContactFormInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn submit(
        &self,
        input: SubmitContactFormInput,
    ) -> APIResponse<submit_contact_form::APIResponse> {
        let body = submit_contact_form::RequestBody {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            message: input.message,
        };
        self.base.post(body, "api/contact", StatusCode::OK).await
    }
}
