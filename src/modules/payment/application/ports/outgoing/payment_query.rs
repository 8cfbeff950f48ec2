use async_trait::async_trait;

use crate::modules::payment::application::domain::entities::Payment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PaymentQuery: Send + Sync {
    async fn list_newest_first(&self) -> Result<Vec<Payment>, PaymentQueryError>;
}
