use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteLeadError {
    #[error("Lead not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteLeadUseCase: Send + Sync {
    async fn execute(&self, lead_id: i64) -> Result<(), DeleteLeadError>;
}
