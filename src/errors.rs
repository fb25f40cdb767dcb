use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::{Display, Error, From};

use crate::templates;

/// Failure of a data-access operation.
///
/// The engine error is carried through untouched; malformed SQL, missing
/// schema objects, constraint violations and connection failures all land here.
#[derive(Debug, Display, Error, From)]
pub enum DalError {
    #[display("Database operation failed: {_0}")]
    Database(#[error(source)] sqlx::Error),
}

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (heading, detail) = match self {
            AppError::NotFound(msg) => ("Page not found", msg.as_str()),
            // Engine details stay in the logs.
            AppError::InternalError(_) => ("Something went wrong", "Please try again later."),
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::html())
            .body(templates::error_page(heading, detail))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DalError> for AppError {
    fn from(err: DalError) -> Self {
        tracing::error!(error = %err, "Data access failed");
        AppError::InternalError(err.to_string())
    }
}
