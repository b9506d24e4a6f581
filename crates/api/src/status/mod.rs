use actix_web::{web, HttpResponse};
use leadflow_api_structs::{get_service_health, get_service_index};

const SERVICE_NAME: &str = "planwell-webhooks";

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(get_service_health::APIResponse {
        status: "ok".into(),
        service: SERVICE_NAME.into(),
    })
}

async fn index() -> HttpResponse {
    let endpoint = |path: &str, method: &str, description: &str| get_service_index::EndpointDTO {
        path: path.into(),
        method: method.into(),
        description: description.into(),
    };
    HttpResponse::Ok().json(get_service_index::APIResponse {
        service: "PlanWell Webhook Server".into(),
        endpoints: vec![
            endpoint("/api/webinar", "POST", "Webinar registration"),
            endpoint("/api/contact", "POST", "Contact form"),
            endpoint("/api/book-call", "POST", "Call booking"),
            endpoint("/health", "GET", "Health check"),
        ],
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/", web::get().to(index));
}
