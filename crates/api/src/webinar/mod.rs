mod register_for_webinar;

use actix_web::web;
use register_for_webinar::register_for_webinar_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/webinar", web::post().to(register_for_webinar_controller));
}
