use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::review::application::ports::{
    incoming::use_cases::{DeleteReviewError, DeleteReviewUseCase},
    outgoing::{ReviewRepository, ReviewRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteReviewUseCase for DeleteReviewService<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(&self, review_id: i64) -> Result<(), DeleteReviewError> {
        self.repository
            .delete_review(review_id)
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::NotFound => DeleteReviewError::NotFound,
                ReviewRepositoryError::DatabaseError(msg) => {
                    error!("Failed to delete review {}: {}", review_id, msg);
                    DeleteReviewError::RepositoryError(msg)
                }
            })?;

        info!("Review {} deleted", review_id);
        Ok(())
    }
}
