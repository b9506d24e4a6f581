use leadflow::telemetry::{get_subscriber, init_subscriber};
use leadflow_api::Application;
use leadflow_infra::setup_context;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();
    dotenvy::dotenv().ok();

    let subscriber = get_subscriber("leadflow".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context();

    let app = Application::new(context).await?;
    app.start().await
}
