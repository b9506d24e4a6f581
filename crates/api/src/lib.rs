mod call_booking;
mod contact;
mod error;
mod job_schedulers;
pub mod nurture;
mod shared;
mod status;
mod webinar;

use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use error::LeadflowError;
use job_schedulers::start_nurture_job;
use leadflow_infra::LeadflowContext;
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    call_booking::configure_routes(cfg);
    contact::configure_routes(cfg);
    webinar::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: LeadflowContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: LeadflowContext) {
        if context.config.nurture_job_enabled {
            start_nurture_job(context);
        } else {
            info!("Nurture job disabled, reminders are expected to be sent by the nurture_scheduler binary");
        }
    }

    async fn configure_server(context: LeadflowContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                    LeadflowError::BadClientData(format!("No data provided: {}", err)).into()
                }))
                .service(web::scope("/api").configure(configure_server_api))
                .configure(status::configure_routes)
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
