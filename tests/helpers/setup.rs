use leadflow_api::Application;
use leadflow_infra::{InMemoryMailer, LeadflowContext, StaticTimeSys};
use leadflow_sdk::LeadflowSDK;
use std::sync::Arc;

// Mon Jan 05 2026 09:05:00 GMT-0500
pub const NOW: i64 = 1767621900000;

pub struct TestApp {
    /// Shares the stores with the running application
    pub ctx: LeadflowContext,
    pub mailer: Arc<InMemoryMailer>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, LeadflowSDK, String) {
    let mut ctx = LeadflowContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.nurture_job_enabled = false;
    ctx.config.local_timezone = chrono_tz::America::New_York;
    ctx.sys = Arc::new(StaticTimeSys(NOW));
    let mailer = ctx.with_inmemory_mailer();

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { ctx, mailer };
    let sdk = LeadflowSDK::new(address.clone());
    (app, sdk, address)
}
