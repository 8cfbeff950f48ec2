use async_trait::async_trait;

use crate::modules::payment::application::domain::entities::{
    InvalidPaymentStatus, PaymentStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatePaymentStatusCommand {
    id: i64,
    status: PaymentStatus,
}

impl UpdatePaymentStatusCommand {
    pub fn new(id: i64, raw_status: &str) -> Result<Self, InvalidPaymentStatus> {
        Ok(Self {
            id,
            status: raw_status.parse()?,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePaymentStatusError {
    #[error("Payment not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePaymentStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdatePaymentStatusCommand,
    ) -> Result<(), UpdatePaymentStatusError>;
}
