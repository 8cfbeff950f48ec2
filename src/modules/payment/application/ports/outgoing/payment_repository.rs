use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::modules::asset::application::domain::image_policy::ImageUpload;
use crate::modules::payment::application::domain::entities::{Payment, PaymentStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct Screenshot {
    pub asset_name: String,
    pub image: ImageUpload,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub student_name: String,
    pub phone: String,
    pub project_name: String,
    pub amount: Decimal,
    pub screenshot: Option<Screenshot>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PaymentRepositoryError {
    #[error("Payment not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Stores the screenshot asset and the payment row atomically, status `pending`.
    async fn insert_payment(&self, payment: NewPayment) -> Result<Payment, PaymentRepositoryError>;

    async fn update_status(
        &self,
        id: i64,
        status: PaymentStatus,
    ) -> Result<(), PaymentRepositoryError>;

    /// Removes the payment together with its screenshot asset.
    async fn delete_payment(&self, id: i64) -> Result<(), PaymentRepositoryError>;
}
