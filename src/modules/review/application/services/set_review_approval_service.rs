use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::review::application::ports::{
    incoming::use_cases::{
        SetReviewApprovalCommand, SetReviewApprovalError, SetReviewApprovalUseCase,
    },
    outgoing::{ReviewRepository, ReviewRepositoryError},
};

#[derive(Debug, Clone)]
pub struct SetReviewApprovalService<R>
where
    R: ReviewRepository + Send + Sync,
{
    repository: R,
}

impl<R> SetReviewApprovalService<R>
where
    R: ReviewRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SetReviewApprovalUseCase for SetReviewApprovalService<R>
where
    R: ReviewRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SetReviewApprovalCommand,
    ) -> Result<(), SetReviewApprovalError> {
        self.repository
            .set_approval(command.id, command.approved)
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::NotFound => SetReviewApprovalError::NotFound,
                ReviewRepositoryError::DatabaseError(msg) => {
                    error!("Failed to set approval on review {}: {}", command.id, msg);
                    SetReviewApprovalError::RepositoryError(msg)
                }
            })?;

        info!("Review {} approved = {}", command.id, command.approved);
        Ok(())
    }
}
