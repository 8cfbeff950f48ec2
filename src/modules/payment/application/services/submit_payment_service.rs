use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::payment::application::{
    domain::entities::{screenshot_asset_name, Payment},
    ports::{
        incoming::use_cases::{SubmitPaymentCommand, SubmitPaymentError, SubmitPaymentUseCase},
        outgoing::PaymentRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SubmitPaymentService<R>
where
    R: PaymentRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitPaymentService<R>
where
    R: PaymentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitPaymentUseCase for SubmitPaymentService<R>
where
    R: PaymentRepository + Send + Sync,
{
    async fn execute(&self, command: SubmitPaymentCommand) -> Result<Payment, SubmitPaymentError> {
        let payment = self
            .repository
            .insert_payment(command.into_new_payment(screenshot_asset_name))
            .await
            .map_err(|e| {
                error!("Failed to store payment: {}", e);
                SubmitPaymentError::RepositoryError(e.to_string())
            })?;

        info!(
            "Payment {} of {} submitted (screenshot: {})",
            payment.id,
            payment.amount,
            payment.screenshot.is_some()
        );
        Ok(payment)
    }
}
