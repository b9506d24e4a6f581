use super::template_context;
use crate::shared::usecase::UseCase;
use chrono::Timelike;
use leadflow_domain::{ReminderTier, RowId};
use leadflow_infra::LeadflowContext;
use thiserror::Error;
use tracing::{error, info, warn};

/// Scans every registrant and sends the nurture email that is due, at most
/// one per registrant and run.
///
/// Runs are not guarded against each other. Only one scheduler may run at a
/// time, otherwise a reminder can be sent twice.
#[derive(Debug)]
pub struct SendNurtureRemindersUseCase;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NurtureRunReport {
    /// Registrants that were looked at
    pub checked: usize,
    /// Reminders accepted by the mailer, in dispatch order
    pub sent: Vec<(RowId, ReminderTier)>,
    /// Reminders that could not be sent and will be retried next run
    pub failed: usize,
    /// Registrants without an email or with an unreadable webinar date
    pub skipped: usize,
}

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Unable to read the registrants: {0}")]
    StorageError(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendNurtureRemindersUseCase {
    type Response = NurtureRunReport;

    type Error = UseCaseError;

    const NAME: &'static str = "SendNurtureReminders";

    async fn execute(&mut self, ctx: &LeadflowContext) -> Result<Self::Response, Self::Error> {
        let registrants = ctx
            .repos
            .registrants
            .find_all()
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        let now_ts = ctx.sys.get_timestamp_millis();
        let local_tz = &ctx.config.local_timezone;
        let mut report = NurtureRunReport::default();

        for registrant in registrants {
            report.checked += 1;
            if registrant.email.trim().is_empty() {
                warn!("Skipping registrant at row {} without email", registrant.row);
                report.skipped += 1;
                continue;
            }
            let webinar_date = match registrant.webinar_date() {
                Ok(date) => date,
                Err(e) => {
                    warn!("Skipping registrant at row {}: {}", registrant.row, e);
                    report.skipped += 1;
                    continue;
                }
            };

            let days_until = webinar_date.days_until(now_ts, local_tz);
            let hour = webinar_date.localize_now(now_ts, local_tz).hour();
            let tier = match registrant.sent.due_tier(days_until, hour) {
                Some(tier) => tier,
                None => continue,
            };

            let template = template_context(
                &registrant.first_name,
                &registrant.webinar_id,
                &registrant.webinar_date,
                &ctx.config,
            );
            if !ctx
                .services
                .notifier
                .send(tier, &registrant.email, &template)
                .await
            {
                report.failed += 1;
                continue;
            }
            report.sent.push((registrant.row, tier));

            // A failed mark means the reminder can be sent again next run
            if let Err(e) = ctx
                .repos
                .registrants
                .mark_sent(registrant.row, tier, &ctx.sys.now_rfc3339())
                .await
            {
                error!(
                    "Sent {} reminder to row {} but could not mark it. Error: {:?}",
                    tier, registrant.row, e
                );
            }
        }

        info!(
            "Nurture run done. Checked: {}, sent: {}, failed: {}, skipped: {}",
            report.checked,
            report.sent.len(),
            report.failed,
            report.skipped
        );
        Ok(report)
    }
}
