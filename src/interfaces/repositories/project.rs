use async_trait::async_trait;

use crate::{
    db::{dal::Dal, value::SqlValue},
    entities::project::{Project, ProjectInsert, PROJECTS_SCHEMA, PROJECTS_TABLE},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Creates the projects table if it is not there yet
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Projects flagged `IsActive = 1`, newest first
    async fn list_active_projects(&self) -> Result<Vec<Project>, AppError>;

    /// Inserts a project and returns its ProjectID
    async fn create_project(&self, project: &ProjectInsert) -> Result<i64, AppError>;

    /// Number of stored projects, active or not
    async fn count_projects(&self) -> Result<i64, AppError>;

    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(dal: Dal) -> Self {
        SqlxProjectRepo { dal }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        self.dal.create_table(PROJECTS_TABLE, PROJECTS_SCHEMA).await?;
        Ok(())
    }

    async fn list_active_projects(&self) -> Result<Vec<Project>, AppError> {
        let rows = self.dal
            .execute_query(
                r#"
                SELECT * FROM projects
                WHERE IsActive = 1
                ORDER BY DateCreated DESC, ProjectID DESC
                "#,
                &[],
            )
            .await?;

        Ok(rows.iter().map(Project::from).collect())
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<i64, AppError> {
        let id = self.dal.insert(PROJECTS_TABLE, &project.to_fields()).await?;
        Ok(id)
    }

    async fn count_projects(&self) -> Result<i64, AppError> {
        let count = self.dal
            .execute_scalar("SELECT COUNT(*) FROM projects", &[])
            .await?
            .and_then(|value| value.as_i64())
            .unwrap_or(0);

        Ok(count)
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        match self.dal.execute_scalar("SELECT 1", &[]).await? {
            Some(SqlValue::Integer(1)) => Ok(()),
            other => Err(AppError::InternalError(format!("Unexpected health probe result: {:?}", other))),
        }
    }
}
