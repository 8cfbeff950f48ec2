use async_trait::async_trait;

use crate::modules::project::application::{
    domain::entities::Project,
    ports::{
        incoming::use_cases::{GetSingleProjectError, GetSingleProjectUseCase},
        outgoing::ProjectQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: i64) -> Result<Project, GetSingleProjectError> {
        self.query
            .find_by_id(project_id)
            .await
            .map_err(|e| GetSingleProjectError::QueryFailed(e.to_string()))?
            .ok_or(GetSingleProjectError::NotFound)
    }
}
