use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetReviewApprovalCommand {
    pub id: i64,
    pub approved: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetReviewApprovalError {
    #[error("Review not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SetReviewApprovalUseCase: Send + Sync {
    async fn execute(&self, command: SetReviewApprovalCommand)
        -> Result<(), SetReviewApprovalError>;
}
