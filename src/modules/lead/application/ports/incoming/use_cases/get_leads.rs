use async_trait::async_trait;

use crate::modules::lead::application::domain::entities::Lead;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetLeadsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetLeadsUseCase: Send + Sync {
    /// Newest first.
    async fn execute(&self) -> Result<Vec<Lead>, GetLeadsError>;
}
