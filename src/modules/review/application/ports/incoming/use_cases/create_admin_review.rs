use async_trait::async_trait;

use crate::modules::review::application::domain::entities::Review;

use super::submit_review::{SubmitReviewCommand, SubmitReviewError};

#[async_trait]
pub trait CreateAdminReviewUseCase: Send + Sync {
    /// Same validation as the public form; stored already approved.
    async fn execute(&self, command: SubmitReviewCommand) -> Result<Review, SubmitReviewError>;
}
