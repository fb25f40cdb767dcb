use actix_web::{http::header, web, HttpResponse, Responder};

use crate::{entities::project::NewProjectForm, errors::AppError, templates, AppState};

use super::pages::html;

pub async fn list_projects(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let projects = state.project_handler.list_active_projects().await?;

    Ok(html(templates::projects_page(&projects)))
}

pub async fn add_project_form() -> impl Responder {
    html(templates::add_project_page())
}

pub async fn add_project(
    state: web::Data<AppState>,
    form: web::Form<NewProjectForm>,
) -> Result<HttpResponse, AppError> {
    state.project_handler.add_project(form.into_inner()).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/project_added"))
        .finish())
}
