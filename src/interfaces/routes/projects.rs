use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects")
            .route(web::get().to(projects::list_projects))
    )
    .service(
        web::resource("/add_project")
            .route(web::get().to(projects::add_project_form))
            .route(web::post().to(projects::add_project))
    );
}
