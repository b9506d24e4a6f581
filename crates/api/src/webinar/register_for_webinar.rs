use crate::{
    error::LeadflowError,
    nurture::template_context,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use leadflow_api_structs::register_for_webinar::{APIResponse, RequestBody};
use leadflow_domain::{NewRegistrant, ReminderTier, RowId, WEBINAR_REGISTRATION_SOURCE};
use leadflow_infra::LeadflowContext;
use tracing::{error, info};

pub async fn register_for_webinar_controller(
    ctx: web::Data<LeadflowContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, LeadflowError> {
    let body = body.0;
    let usecase = RegisterForWebinarUseCase {
        name: body.name,
        email: body.email,
        agency: body.agency.unwrap_or_default(),
        webinar_id: body.webinar_id,
        webinar_date: body.webinar_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.email_sent)))
        .map_err(LeadflowError::from)
}

/// Stores a new registrant and sends the confirmation email right away.
/// The remaining reminders are left to the nurture scheduler.
#[derive(Debug)]
pub struct RegisterForWebinarUseCase {
    pub name: String,
    pub email: String,
    pub agency: String,
    pub webinar_id: String,
    pub webinar_date: String,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub row: RowId,
    pub email_sent: bool,
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
impl UseCase for RegisterForWebinarUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "RegisterForWebinar";

    async fn execute(&mut self, ctx: &LeadflowContext) -> Result<Self::Response, Self::Error> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(UseCaseError::EmailRequired);
        }

        let (first_name, last_name) = NewRegistrant::split_name(&self.name);
        let registrant = NewRegistrant {
            first_name,
            last_name,
            email: email.to_string(),
            agency: self.agency.trim().to_string(),
            submitted_at: ctx.sys.now_rfc3339(),
            source: WEBINAR_REGISTRATION_SOURCE.into(),
            webinar_id: self.webinar_id.trim().to_string(),
            webinar_date: self.webinar_date.trim().to_string(),
        };
        let row = ctx
            .repos
            .registrants
            .insert(&registrant)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!("Registrant {} added to row {}", registrant.email, row);

        let template = template_context(
            &registrant.first_name,
            &registrant.webinar_id,
            &registrant.webinar_date,
            &ctx.config,
        );
        let email_sent = ctx
            .services
            .notifier
            .send(ReminderTier::Confirmation, &registrant.email, &template)
            .await;

        if email_sent {
            if let Err(e) = ctx
                .repos
                .registrants
                .mark_sent(row, ReminderTier::Confirmation, &ctx.sys.now_rfc3339())
                .await
            {
                error!(
                    "Unable to mark the confirmation for row {} as sent. Error: {:?}",
                    row, e
                );
            }
        }

        Ok(UseCaseResponse { row, email_sent })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadflow_infra::StaticTimeSys;
    use std::sync::Arc;

    fn usecase(name: &str, email: &str) -> RegisterForWebinarUseCase {
        RegisterForWebinarUseCase {
            name: name.into(),
            email: email.into(),
            agency: " VA ".into(),
            webinar_id: "jan-16-2026".into(),
            webinar_date: "2026-01-16T11:00:00-05:00".into(),
        }
    }

    #[actix_web::test]
    async fn registers_and_confirms() {
        let mut ctx = LeadflowContext::create_inmemory();
        let mailer = ctx.with_inmemory_mailer();
        ctx.sys = Arc::new(StaticTimeSys(1767621900000));

        let res = execute(usecase("John Q Smith", " john@example.com "), &ctx)
            .await
            .unwrap();
        assert!(res.email_sent);

        let registrant = ctx.repos.registrants.find_all().await.unwrap().remove(0);
        assert_eq!(registrant.row, res.row);
        assert_eq!(registrant.first_name, "John");
        assert_eq!(registrant.last_name, "Q Smith");
        assert_eq!(registrant.email, "john@example.com");
        assert_eq!(registrant.agency, "VA");
        assert_eq!(registrant.submitted_at, "2026-01-05T14:05:00Z");
        assert_eq!(registrant.source, WEBINAR_REGISTRATION_SOURCE);
        assert_eq!(
            registrant.sent.sent_at(ReminderTier::Confirmation),
            Some("2026-01-05T14:05:00Z")
        );

        let sent = mailer.sent_to("john@example.com");
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].email.subject,
            "You're registered for the FERS Workshop on Friday, January 16"
        );
        assert!(sent[0].email.body.starts_with("Hi John,"));
    }

    #[actix_web::test]
    async fn failed_confirmation_leaves_flag_unset() {
        let mut ctx = LeadflowContext::create_inmemory();
        let mailer = ctx.with_inmemory_mailer();
        mailer.fail_for("john@example.com");

        let res = execute(usecase("", "john@example.com"), &ctx).await.unwrap();
        assert!(!res.email_sent);

        let registrant = ctx.repos.registrants.find_all().await.unwrap().remove(0);
        assert_eq!(registrant.greeting_name(), "there");
        assert!(!registrant.sent.is_sent(ReminderTier::Confirmation));
    }

    #[actix_web::test]
    async fn rejects_missing_email() {
        let ctx = LeadflowContext::create_inmemory();
        let res = execute(usecase("John", "  "), &ctx).await;
        assert!(matches!(res, Err(UseCaseError::EmailRequired)));
        assert!(ctx.repos.registrants.find_all().await.unwrap().is_empty());
    }
}
