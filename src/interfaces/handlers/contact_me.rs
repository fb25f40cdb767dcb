use actix_web::{http::header, web, HttpResponse, Responder};

use crate::{entities::contact_me::ContactMeForm, templates, AppState};

use super::pages::html;

pub async fn contact_form() -> impl Responder {
    html(templates::contact_page())
}

pub async fn submit_contact(
    state: web::Data<AppState>,
    form: web::Form<ContactMeForm>,
) -> impl Responder {
    state.contact_handler.accept_message(form.into_inner());

    HttpResponse::Found()
        .insert_header((header::LOCATION, "/thanks"))
        .finish()
}
