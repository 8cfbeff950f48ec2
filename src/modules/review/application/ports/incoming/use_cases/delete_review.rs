use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteReviewError {
    #[error("Review not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteReviewUseCase: Send + Sync {
    async fn execute(&self, review_id: i64) -> Result<(), DeleteReviewError>;
}
