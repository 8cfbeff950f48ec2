use async_trait::async_trait;

use crate::modules::review::application::domain::entities::Review;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetReviewsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetApprovedReviewsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Review>, GetReviewsError>;
}

#[async_trait]
pub trait GetAllReviewsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Review>, GetReviewsError>;
}
