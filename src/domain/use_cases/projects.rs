use crate::{
    entities::project::{NewProjectForm, Project},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Projects shown on the public listing
    pub async fn list_active_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_active_projects().await
    }

    /// Stores a submitted project as active and returns its id
    pub async fn add_project(&self, request: NewProjectForm) -> Result<i64, AppError> {
        let new_project = request.prepare_for_insert();

        let id = self.project_repo.create_project(&new_project).await?;
        tracing::info!(project_id = id, "Project added");

        Ok(id)
    }

    pub async fn total_projects(&self) -> Result<i64, AppError> {
        self.project_repo.count_projects().await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;

    use super::*;
    use crate::entities::project::ProjectInsert;

    mock! {
        pub ProjectRepo {}

        #[async_trait]
        impl ProjectRepository for ProjectRepo {
            async fn ensure_schema(&self) -> Result<(), AppError>;
            async fn list_active_projects(&self) -> Result<Vec<Project>, AppError>;
            async fn create_project(&self, project: &ProjectInsert) -> Result<i64, AppError>;
            async fn count_projects(&self) -> Result<i64, AppError>;
            async fn check_connection(&self) -> Result<(), AppError>;
        }
    }

    #[actix_rt::test]
    async fn add_project_inserts_active_row_with_form_defaults() {
        let mut repo = MockProjectRepo::new();

        repo.expect_create_project()
            .withf(|p: &ProjectInsert| {
                p.title.as_deref() == Some("Workflow Test")
                    && p.is_active
                    && p.technologies_used.is_empty()
                    && p.project_url.is_empty()
            })
            .times(1)
            .returning(|_| Ok(42));

        let handler = ProjectHandler::new(repo);

        let id = handler
            .add_project(NewProjectForm {
                title: Some("Workflow Test".into()),
                description: Some("Testing the full workflow".into()),
                imagefilename: Some("workflow.jpg".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(id, 42);
    }

    #[actix_rt::test]
    async fn add_project_surfaces_storage_failures() {
        let mut repo = MockProjectRepo::new();

        repo.expect_create_project()
            .returning(|_| Err(AppError::InternalError("NOT NULL constraint failed: projects.Title".into())));

        let handler = ProjectHandler::new(repo);
        let result = handler.add_project(NewProjectForm::default()).await;

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[actix_rt::test]
    async fn total_projects_delegates_to_repository() {
        let mut repo = MockProjectRepo::new();
        repo.expect_count_projects().times(1).returning(|| Ok(3));

        let handler = ProjectHandler::new(repo);

        assert_eq!(handler.total_projects().await.unwrap(), 3);
    }
}
