use crate::nurture::run_nurture_scheduler;
use actix_web::rt::time::{interval, sleep};
use leadflow_infra::LeadflowContext;
use std::time::Duration;
use tracing::info;

/// Runs are aligned to five minutes past the interval, like a `5 * * * *`
/// cron entry for hourly runs
const NURTURE_JOB_OFFSET_SECS: usize = 5 * 60;

/// Seconds from `now_ts` (millis) until the next time that is `offset_secs`
/// into an interval of `interval_secs`
pub fn get_start_delay(now_ts: usize, interval_secs: usize, offset_secs: usize) -> usize {
    let offset_secs = offset_secs % interval_secs;
    let secs_into_interval = (now_ts / 1000) % interval_secs;
    if secs_into_interval < offset_secs {
        offset_secs - secs_into_interval
    } else {
        interval_secs - secs_into_interval + offset_secs
    }
}

pub fn start_nurture_job(ctx: LeadflowContext) {
    let interval_secs = ctx.config.nurture_job_interval_secs.max(60);
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_first_run = get_start_delay(
            now as usize,
            interval_secs as usize,
            NURTURE_JOB_OFFSET_SECS,
        );
        info!(
            "Nurture job starts in {} seconds and runs every {} seconds",
            secs_to_first_run, interval_secs
        );

        sleep(Duration::from_secs(secs_to_first_run as u64)).await;
        let mut nurture_interval = interval(Duration::from_secs(interval_secs));
        loop {
            nurture_interval.tick().await;
            // Awaited in place so that two runs never overlap
            let _ = run_nurture_scheduler(&ctx).await;
        }
    });
}
