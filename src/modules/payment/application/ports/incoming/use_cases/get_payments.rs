use async_trait::async_trait;

use crate::modules::payment::application::domain::entities::Payment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPaymentsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPaymentsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Payment>, GetPaymentsError>;
}
