use super::book_call::{BookCallUseCase, CallBooking};
use crate::shared::usecase::Subscriber;
use leadflow_domain::EmailContent;
use leadflow_infra::LeadflowContext;
use tracing::error;

pub struct SendConfirmationOnCallBooked;

#[async_trait::async_trait(?Send)]
impl Subscriber<BookCallUseCase> for SendConfirmationOnCallBooked {
    async fn notify(&self, e: &CallBooking, ctx: &LeadflowContext) {
        if let CallBooking::Assigned {
            prospect, advisor, ..
        } = e
        {
            let email = EmailContent::call_booking_confirmation(prospect, advisor);
            if let Err(e) = ctx.services.mailer.send(&prospect.email, &email).await {
                error!(
                    "Failed to send call booking confirmation to {}. Error: {:?}",
                    prospect.email, e
                );
            }
        }
    }
}

pub struct NotifyAdvisorOnCallBooked;

#[async_trait::async_trait(?Send)]
impl Subscriber<BookCallUseCase> for NotifyAdvisorOnCallBooked {
    async fn notify(&self, e: &CallBooking, ctx: &LeadflowContext) {
        if let CallBooking::Assigned {
            prospect,
            advisor,
            submitted_at,
        } = e
        {
            let email = EmailContent::advisor_notification(prospect, submitted_at);
            if let Err(e) = ctx.services.mailer.send(&advisor.email, &email).await {
                error!(
                    "Failed to notify {} about a call booking. Error: {:?}",
                    advisor.id, e
                );
            }
        }
    }
}
