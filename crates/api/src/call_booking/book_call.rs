use super::subscribers::{NotifyAdvisorOnCallBooked, SendConfirmationOnCallBooked};
use crate::{
    error::LeadflowError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use leadflow_api_structs::{book_call::*, dtos::AdvisorDTO};
use leadflow_domain::{
    Advisor, CallBookingLogEntry, Prospect, ScreeningAnswers, ScreeningOutcome,
    NOT_FEDERAL_MESSAGE, WEBINAR_REDIRECT_MESSAGE, WEBINAR_REDIRECT_PATH,
};
use leadflow_infra::LeadflowContext;
use tracing::{error, info};

pub async fn book_call_controller(
    ctx: web::Data<LeadflowContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, LeadflowError> {
    let body = body.0;
    let usecase = BookCallUseCase {
        prospect: Prospect {
            name: body.name,
            email: body.email,
            phone: body.phone,
            topic: body.topic,
            screening: ScreeningAnswers {
                is_federal_employee: body.is_federal_employee,
                wants_advisor: body.wants_advisor,
                single_question: body.single_question,
            },
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| {
            let res = match booking {
                CallBooking::Assigned { advisor, .. } => {
                    APIResponse::matched(AdvisorDTO::new(&advisor))
                }
                CallBooking::Rejected(ScreeningOutcome::NotFederal) => {
                    APIResponse::rejected(NOT_FEDERAL_MESSAGE.into(), None)
                }
                CallBooking::Rejected(_) => APIResponse::rejected(
                    WEBINAR_REDIRECT_MESSAGE.into(),
                    Some(WEBINAR_REDIRECT_PATH.into()),
                ),
            };
            HttpResponse::Ok().json(res)
        })
        .map_err(LeadflowError::from)
}

/// Screens a call booking request and assigns qualified prospects to the
/// next advisor in the round robin
#[derive(Debug)]
pub struct BookCallUseCase {
    pub prospect: Prospect,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallBooking {
    Assigned {
        prospect: Prospect,
        advisor: Advisor,
        /// Local time of the booking, e.g. `2026-01-05 09:05 AM`
        submitted_at: String,
    },
    Rejected(ScreeningOutcome),
}

#[derive(Debug)]
pub enum UseCaseError {
    NoAdvisorsAvailable,
    StorageError,
}

impl From<UseCaseError> for LeadflowError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NoAdvisorsAvailable | UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl BookCallUseCase {
    async fn log(&self, ctx: &LeadflowContext, assigned_to: Option<String>, qualified: bool) {
        let entry = CallBookingLogEntry {
            timestamp: ctx.sys.now_rfc3339(),
            prospect: self.prospect.clone(),
            assigned_to,
            qualified,
        };
        if let Err(e) = ctx.repos.call_bookings.insert(&entry).await {
            error!("Unable to log call booking from {}. Error: {:?}", self.prospect.email, e);
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for BookCallUseCase {
    type Response = CallBooking;

    type Error = UseCaseError;

    const NAME: &'static str = "BookCall";

    async fn execute(&mut self, ctx: &LeadflowContext) -> Result<Self::Response, Self::Error> {
        let outcome = self.prospect.screening.screen();
        if outcome != ScreeningOutcome::Qualified {
            info!("Call booking from {} not qualified: {:?}", self.prospect.email, outcome);
            self.log(ctx, None, false).await;
            return Ok(CallBooking::Rejected(outcome));
        }

        let advisor = ctx
            .repos
            .round_robin
            .assign(&ctx.config.advisors)
            .await
            .map_err(|e| {
                error!("Unable to update the round robin state. Error: {:?}", e);
                UseCaseError::StorageError
            })?
            .ok_or(UseCaseError::NoAdvisorsAvailable)?;
        info!("Call booking from {} assigned to {}", self.prospect.email, advisor.id);
        self.log(ctx, Some(advisor.id.clone()), true).await;

        let submitted_at = ctx
            .sys
            .now()
            .with_timezone(&ctx.config.local_timezone)
            .format("%Y-%m-%d %I:%M %p")
            .to_string();

        Ok(CallBooking::Assigned {
            prospect: self.prospect.clone(),
            advisor,
            submitted_at,
        })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![
            Box::new(SendConfirmationOnCallBooked),
            Box::new(NotifyAdvisorOnCallBooked),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadflow_infra::StaticTimeSys;
    use std::sync::Arc;

    fn prospect(email: &str, federal: &str, wants_advisor: &str, single: &str) -> Prospect {
        Prospect {
            name: "John Smith".into(),
            email: email.into(),
            phone: "555-123-4567".into(),
            topic: "retirement-timing".into(),
            screening: ScreeningAnswers {
                is_federal_employee: federal.into(),
                wants_advisor: wants_advisor.into(),
                single_question: single.into(),
            },
        }
    }

    #[actix_web::test]
    async fn assigns_qualified_prospects_in_turn() {
        let mut ctx = LeadflowContext::create_inmemory();
        let mailer = ctx.with_inmemory_mailer();
        ctx.sys = Arc::new(StaticTimeSys(1767621900000));
        ctx.config.local_timezone = chrono_tz::America::New_York;

        let mut assigned = Vec::new();
        for email in ["a@x.com", "b@x.com", "c@x.com"] {
            let usecase = BookCallUseCase {
                prospect: prospect(email, "yes", "yes", "no"),
            };
            match execute(usecase, &ctx).await.unwrap() {
                CallBooking::Assigned {
                    advisor,
                    submitted_at,
                    ..
                } => {
                    assert_eq!(submitted_at, "2026-01-05 09:05 AM");
                    assigned.push(advisor.id);
                }
                other => panic!("Expected an assignment, got {:?}", other),
            }
        }
        assert_eq!(assigned, vec!["david", "brennan", "david"]);

        let state = ctx.repos.round_robin.load().await.unwrap();
        assert_eq!(state.count_for("david"), 2);
        assert_eq!(state.count_for("brennan"), 1);

        let log = ctx.repos.call_bookings.find_all().await.unwrap();
        assert_eq!(log.len(), 3);
        assert!(log.iter().all(|entry| entry.qualified));
        assert_eq!(log[1].assigned_to, Some("brennan".to_string()));

        // Prospect confirmation and advisor notification for every booking
        assert_eq!(mailer.outbox().len(), 6);
        let confirmation = mailer.sent_to("b@x.com");
        assert_eq!(
            confirmation[0].email.subject,
            "Your Call with Brennan Rhule at PlanWell"
        );
        let advisor_email = ctx.config.advisors[1].email.clone();
        let notification = mailer.sent_to(&advisor_email);
        assert_eq!(notification.len(), 1);
        assert!(notification[0].email.body.contains("Email: b@x.com"));
        assert!(notification[0]
            .email
            .body
            .contains("Submitted: 2026-01-05 09:05 AM"));
    }

    #[actix_web::test]
    async fn logs_rejected_prospects_without_assigning() {
        let mut ctx = LeadflowContext::create_inmemory();
        let mailer = ctx.with_inmemory_mailer();

        for (answers, expected) in [
            (("no", "yes", "no"), ScreeningOutcome::NotFederal),
            (("yes", "no", "no"), ScreeningOutcome::RedirectToWebinar),
            (("yes", "yes", "yes"), ScreeningOutcome::RedirectToWebinar),
        ] {
            let usecase = BookCallUseCase {
                prospect: prospect("a@x.com", answers.0, answers.1, answers.2),
            };
            assert_eq!(
                execute(usecase, &ctx).await.unwrap(),
                CallBooking::Rejected(expected)
            );
        }

        let log = ctx.repos.call_bookings.find_all().await.unwrap();
        assert_eq!(log.len(), 3);
        assert!(log.iter().all(|e| !e.qualified && e.assigned_to.is_none()));
        assert_eq!(ctx.repos.round_robin.load().await.unwrap().last_assigned, None);
        assert!(mailer.outbox().is_empty());
    }

    #[actix_web::test]
    async fn email_failures_do_not_fail_the_booking() {
        let mut ctx = LeadflowContext::create_inmemory();
        let mailer = ctx.with_inmemory_mailer();
        mailer.fail_for("a@x.com");

        let usecase = BookCallUseCase {
            prospect: prospect("a@x.com", "yes", "yes", "no"),
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Ok(CallBooking::Assigned { .. })
        ));
        // The advisor is still notified
        assert_eq!(mailer.outbox().len(), 1);
    }

    #[actix_web::test]
    async fn empty_roster_is_an_error() {
        let mut ctx = LeadflowContext::create_inmemory();
        ctx.config.advisors.clear();

        let usecase = BookCallUseCase {
            prospect: prospect("a@x.com", "yes", "yes", "no"),
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseError::NoAdvisorsAvailable)
        ));
    }
}
