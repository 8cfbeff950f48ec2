use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::modules::asset::application::domain::image_policy::ImageUpload;
use crate::modules::payment::application::{
    domain::entities::{limits, Payment},
    ports::outgoing::{NewPayment, Screenshot},
};
use crate::shared::validation::{parse_amount, RequiredFields, ValidationError};

/// Text fields of the multipart payment form.
#[derive(Debug, Clone, Default)]
pub struct PaymentSubmission {
    pub student_name: Option<String>,
    pub phone: Option<String>,
    pub project_name: Option<String>,
    pub amount: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SubmitPaymentCommand {
    student_name: String,
    phone: String,
    project_name: String,
    amount: Decimal,
    screenshot: Option<ImageUpload>,
}

impl SubmitPaymentCommand {
    pub fn new(
        submission: PaymentSubmission,
        screenshot: Option<ImageUpload>,
    ) -> Result<Self, ValidationError> {
        let mut required = RequiredFields::new();
        let student_name =
            required.text("student_name", submission.student_name, limits::STUDENT_NAME);
        let phone = required.text("phone", submission.phone, limits::PHONE);
        let project_name =
            required.text("project_name", submission.project_name, limits::PROJECT_NAME);
        let raw_amount = required.text("amount", submission.amount, limits::AMOUNT);
        required.finish()?;

        Ok(Self {
            student_name,
            phone,
            project_name,
            amount: parse_amount("amount", &raw_amount)?,
            screenshot,
        })
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn has_screenshot(&self) -> bool {
        self.screenshot.is_some()
    }

    /// `asset_name` is only called when a screenshot was attached.
    pub fn into_new_payment(self, asset_name: impl FnOnce() -> String) -> NewPayment {
        NewPayment {
            student_name: self.student_name,
            phone: self.phone,
            project_name: self.project_name,
            amount: self.amount,
            screenshot: self.screenshot.map(|image| Screenshot {
                asset_name: asset_name(),
                image,
            }),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitPaymentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitPaymentUseCase: Send + Sync {
    async fn execute(&self, command: SubmitPaymentCommand) -> Result<Payment, SubmitPaymentError>;
}
