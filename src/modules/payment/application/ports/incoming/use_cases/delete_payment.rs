use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePaymentError {
    #[error("Payment not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePaymentUseCase: Send + Sync {
    async fn execute(&self, payment_id: i64) -> Result<(), DeletePaymentError>;
}
