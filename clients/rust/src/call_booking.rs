use crate::base::{APIResponse, BaseClient};
use leadflow_api_structs::book_call;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CallBookingClient {
    base: Arc<BaseClient>,
}

/// Answers are `true` for "yes" and `false` for "no"
pub struct BookCallInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub topic: String,
    pub is_federal_employee: bool,
    pub wants_advisor: bool,
    pub single_question: bool,
}

fn answer(yes: bool) -> String {
    if yes { "yes" } else { "no" }.to_string()
}

impl CallBookingClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn book(&self, input: BookCallInput) -> APIResponse<book_call::APIResponse> {
        let body = book_call::RequestBody {
            name: input.name,
            email: input.email,
            phone: input.phone,
            topic: input.topic,
            is_federal_employee: answer(input.is_federal_employee),
            wants_advisor: answer(input.wants_advisor),
            single_question: answer(input.single_question),
        };
        self.base.post(body, "api/book-call", StatusCode::OK).await
    }
}
