use async_trait::async_trait;

use crate::modules::review::application::domain::entities::Review;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Both listings are newest first.
#[async_trait]
pub trait ReviewQuery: Send + Sync {
    async fn list_approved(&self) -> Result<Vec<Review>, ReviewQueryError>;

    async fn list_all(&self) -> Result<Vec<Review>, ReviewQueryError>;
}
