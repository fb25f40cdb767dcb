use std::path::Path;

use actix_files::Files;
use actix_web::web;

use crate::handlers;

mod contact;
mod pages;
mod projects;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::config_routes)
        .configure(projects::config_routes)
        .configure(contact::config_routes)
        .configure(system::config_routes);
}

/// Applied with `App::default_service`.
pub fn not_found_service() -> actix_web::Route {
    web::route().to(handlers::pages::not_found)
}

/// Serves stylesheets and project images from `dir` under `/static`.
pub fn static_files(dir: &Path) -> Files {
    Files::new("/static", dir).default_handler(not_found_service())
}
