mod submit_contact_form;

use actix_web::web;
use submit_contact_form::submit_contact_form_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(submit_contact_form_controller));
}
