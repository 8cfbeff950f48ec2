use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::review::application::{
    domain::entities::Review,
    ports::{
        incoming::use_cases::{CreateAdminReviewUseCase, SubmitReviewCommand, SubmitReviewError},
        outgoing::ReviewRepository,
    },
};

#[derive(Debug, Clone)]
pub struct CreateAdminReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateAdminReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateAdminReviewUseCase for CreateAdminReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, command: SubmitReviewCommand) -> Result<Review, SubmitReviewError> {
        let review = self
            .repository
            .insert_review(command.into_new_review(true))
            .await
            .map_err(|e| {
                error!("Failed to store admin review: {}", e);
                SubmitReviewError::RepositoryError(e.to_string())
            })?;

        info!("Admin review {} created (approved)", review.id);
        Ok(review)
    }
}
