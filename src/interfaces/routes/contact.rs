use actix_web::web;

use crate::handlers::contact_me;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/contact")
            .route(web::get().to(contact_me::contact_form))
            .route(web::post().to(contact_me::submit_contact))
    );
}
