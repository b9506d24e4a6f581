mod book_call;
mod subscribers;

use actix_web::web;
use book_call::book_call_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/book-call", web::post().to(book_call_controller));
}
