use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Popular first, then newest (ties: higher id first).
    async fn list_catalog(&self) -> Result<Vec<Project>, ProjectQueryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, ProjectQueryError>;
}
