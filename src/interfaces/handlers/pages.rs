use actix_web::{http::header::ContentType, HttpResponse, Responder};

use crate::{errors::AppError, templates};

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(body)
}

pub async fn index() -> impl Responder {
    html(templates::home_page())
}

pub async fn about() -> impl Responder {
    html(templates::about_page())
}

pub async fn resume() -> impl Responder {
    html(templates::resume_page())
}

pub async fn thanks() -> impl Responder {
    html(templates::thanks_page())
}

pub async fn project_added() -> impl Responder {
    html(templates::project_added_page())
}

/// Fallback for unknown paths.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("The page you asked for does not exist.".into()))
}
