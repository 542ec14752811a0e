// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Front end
    cfg.route("/", web::get().to(handlers::index::index));

    // Generator
    cfg.route("/generate", web::post().to(handlers::generator::generate_passwords))
        .route("/assess", web::post().to(handlers::generator::assess_password));
}
