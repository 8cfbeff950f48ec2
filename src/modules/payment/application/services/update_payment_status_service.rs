use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::payment::application::ports::{
    incoming::use_cases::{
        UpdatePaymentStatusCommand, UpdatePaymentStatusError, UpdatePaymentStatusUseCase,
    },
    outgoing::{PaymentRepository, PaymentRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdatePaymentStatusService<R>
where
    R: PaymentRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdatePaymentStatusService<R>
where
    R: PaymentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdatePaymentStatusUseCase for UpdatePaymentStatusService<R>
where
    R: PaymentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdatePaymentStatusCommand,
    ) -> Result<(), UpdatePaymentStatusError> {
        self.repository
            .update_status(command.id(), command.status())
            .await
            .map_err(|e| match e {
                PaymentRepositoryError::NotFound => UpdatePaymentStatusError::NotFound,
                PaymentRepositoryError::DatabaseError(msg) => {
                    error!("Failed to update payment {}: {}", command.id(), msg);
                    UpdatePaymentStatusError::RepositoryError(msg)
                }
            })?;

        info!("Payment {} marked '{}'", command.id(), command.status());
        Ok(())
    }
}
