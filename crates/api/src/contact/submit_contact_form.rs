use crate::{
    error::LeadflowError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use leadflow_api_structs::submit_contact_form::{APIResponse, RequestBody};
use leadflow_domain::{ContactSubmission, RowId, CONTACT_FORM_SOURCE};
use leadflow_infra::LeadflowContext;
use tracing::info;

pub async fn submit_contact_form_controller(
    ctx: web::Data<LeadflowContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, LeadflowError> {
    let body = body.0;
    let usecase = SubmitContactFormUseCase {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        phone: body.phone,
        message: body.message,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new()))
        .map_err(LeadflowError::from)
}

#[derive(Debug)]
pub struct SubmitContactFormUseCase {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    EmailRequired,
    StorageError,
}

impl From<UseCaseError> for LeadflowError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmailRequired => Self::BadClientData("Email is required".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SubmitContactFormUseCase {
    type Response = RowId;

    type Error = UseCaseError;

    const NAME: &'static str = "SubmitContactForm";

    async fn execute(&mut self, ctx: &LeadflowContext) -> Result<Self::Response, Self::Error> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(UseCaseError::EmailRequired);
        }

        let submission = ContactSubmission {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
            submitted_at: ctx.sys.now_rfc3339(),
            source: CONTACT_FORM_SOURCE.into(),
        };
        let row = ctx
            .repos
            .contacts
            .insert(&submission)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!("Contact form submission from {} added to row {}", submission.email, row);

        Ok(row)
    }
}
