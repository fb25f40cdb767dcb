use actix_web::web;

use crate::handlers::pages;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(pages::index)))
        .service(web::resource("/about").route(web::get().to(pages::about)))
        .service(web::resource("/resume").route(web::get().to(pages::resume)))
        .service(web::resource("/thanks").route(web::get().to(pages::thanks)))
        .service(web::resource("/project_added").route(web::get().to(pages::project_added)));
}
