use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::payment::application::ports::{
    incoming::use_cases::{DeletePaymentError, DeletePaymentUseCase},
    outgoing::{PaymentRepository, PaymentRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeletePaymentService<R>
where
    R: PaymentRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeletePaymentService<R>
where
    R: PaymentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeletePaymentUseCase for DeletePaymentService<R>
where
    R: PaymentRepository + Send + Sync,
{
    async fn execute(&self, payment_id: i64) -> Result<(), DeletePaymentError> {
        self.repository
            .delete_payment(payment_id)
            .await
            .map_err(|e| match e {
                PaymentRepositoryError::NotFound => DeletePaymentError::NotFound,
                PaymentRepositoryError::DatabaseError(msg) => {
                    error!("Failed to delete payment {}: {}", payment_id, msg);
                    DeletePaymentError::RepositoryError(msg)
                }
            })?;

        info!("Payment {} deleted", payment_id);
        Ok(())
    }
}
