use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::review::application::{
    domain::entities::Review,
    ports::{
        incoming::use_cases::{SubmitReviewCommand, SubmitReviewError, SubmitReviewUseCase},
        outgoing::ReviewRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SubmitReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitReviewUseCase for SubmitReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, command: SubmitReviewCommand) -> Result<Review, SubmitReviewError> {
        let review = self
            .repository
            .insert_review(command.into_new_review(false))
            .await
            .map_err(|e| {
                error!("Failed to store review: {}", e);
                SubmitReviewError::RepositoryError(e.to_string())
            })?;

        info!("Review {} submitted, awaiting approval", review.id);
        Ok(review)
    }
}
