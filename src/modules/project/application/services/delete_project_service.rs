use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::project::application::ports::{
    incoming::use_cases::{DeleteProjectError, DeleteProjectUseCase},
    outgoing::{ProjectRepository, ProjectRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, project_id: i64) -> Result<(), DeleteProjectError> {
        self.repository
            .delete_project(project_id)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg) => {
                    error!("Failed to delete project {}: {}", project_id, msg);
                    DeleteProjectError::RepositoryError(msg)
                }
            })?;

        info!("Project {} deleted", project_id);
        Ok(())
    }
}
