//! Runs one nurture scan and exits. Meant to be triggered by cron, e.g.
//! `5 * * * *`. Exits non-zero when the registrants cannot be read.
use leadflow::telemetry::{get_subscriber, init_subscriber};
use leadflow_api::nurture::run_nurture_scheduler;
use leadflow_infra::setup_context;
use std::process::ExitCode;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> ExitCode {
    openssl_probe::init_ssl_cert_env_vars();
    dotenvy::dotenv().ok();

    let subscriber = get_subscriber("leadflow_nurture_scheduler".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();
    match run_nurture_scheduler(&context).await {
        Ok(report) => {
            info!("Sent {} reminders", report.sent.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Nurture run aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
