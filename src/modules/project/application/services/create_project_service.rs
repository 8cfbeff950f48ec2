use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::project::application::{
    domain::entities::Project,
    ports::{
        incoming::use_cases::{CreateProjectCommand, CreateProjectError, CreateProjectUseCase},
        outgoing::ProjectRepository,
    },
};

#[derive(Debug, Clone)]
pub struct CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, command: CreateProjectCommand) -> Result<Project, CreateProjectError> {
        let project = self
            .repository
            .insert_project(command.into_new_project())
            .await
            .map_err(|e| {
                error!("Failed to store project: {}", e);
                CreateProjectError::RepositoryError(e.to_string())
            })?;

        info!("Project {} added: {}", project.id, project.title);
        Ok(project)
    }
}
