use async_trait::async_trait;

use crate::modules::lead::application::domain::entities::Lead;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LeadQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LeadQuery: Send + Sync {
    async fn list_newest_first(&self) -> Result<Vec<Lead>, LeadQueryError>;
}
