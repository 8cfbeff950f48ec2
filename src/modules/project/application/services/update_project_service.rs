use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::project::application::{
    domain::entities::Project,
    ports::{
        incoming::use_cases::{UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase},
        outgoing::{ProjectRepository, ProjectRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateProjectCommand) -> Result<Project, UpdateProjectError> {
        let (id, changes) = command.into_parts();

        let project = self
            .repository
            .update_project(id, changes)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
                ProjectRepositoryError::DatabaseError(msg) => {
                    error!("Failed to update project {}: {}", id, msg);
                    UpdateProjectError::RepositoryError(msg)
                }
            })?;

        info!("Project {} updated", id);
        Ok(project)
    }
}
