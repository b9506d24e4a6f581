pub mod send_nurture_reminders;

use crate::shared::usecase::execute;
use leadflow_domain::{greeting_name, TemplateContext, WebinarDate};
use leadflow_infra::{Config, LeadflowContext};
use send_nurture_reminders::{NurtureRunReport, SendNurtureRemindersUseCase, UseCaseError};

/// One full nurture scan. This is the entry point for cron triggered runs.
pub async fn run_nurture_scheduler(
    ctx: &LeadflowContext,
) -> Result<NurtureRunReport, UseCaseError> {
    execute(SendNurtureRemindersUseCase, ctx).await
}

/// Builds the values for the webinar emails. A webinar date that cannot be
/// parsed is shown as submitted.
pub fn template_context(
    first_name: &str,
    webinar_id: &str,
    webinar_date: &str,
    config: &Config,
) -> TemplateContext {
    let (formatted_date, timezone) = match WebinarDate::parse(webinar_date) {
        Ok(date) => (date.format_long(), date.timezone_label()),
        Err(_) => (webinar_date.trim().to_string(), "EST"),
    };
    TemplateContext {
        first_name: greeting_name(first_name).to_string(),
        webinar_date: formatted_date,
        timezone: timezone.to_string(),
        join_link: config.join_link(webinar_id).to_string(),
    }
}
