mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes, templates};
pub use infrastructure::{db, utils};

use db::Dal;
use repositories::sqlx_repo::SqlxProjectRepo;
use use_cases::{contact::ContactMeHandler, projects::ProjectHandler};

/// Per-application state handed to every request.
///
/// The data access layer is injected here rather than held in a global, so
/// each server or test can point at its own database file.
pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub contact_handler: ContactMeHandler,
}

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;

impl AppState {
    pub fn new(dal: Dal) -> Self {
        let project_repo = SqlxProjectRepo::new(dal);

        AppState {
            project_handler: ProjectHandler::new(project_repo),
            contact_handler: ContactMeHandler::new(),
        }
    }
}
