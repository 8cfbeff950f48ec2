use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::lead::application::ports::{
    incoming::use_cases::{UpdateLeadStatusCommand, UpdateLeadStatusError, UpdateLeadStatusUseCase},
    outgoing::{LeadRepository, LeadRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateLeadStatusService<R>
where
    R: LeadRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateLeadStatusService<R>
where
    R: LeadRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateLeadStatusUseCase for UpdateLeadStatusService<R>
where
    R: LeadRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateLeadStatusCommand) -> Result<(), UpdateLeadStatusError> {
        self.repository
            .update_status(command.id(), command.status())
            .await
            .map_err(|e| match e {
                LeadRepositoryError::NotFound => UpdateLeadStatusError::NotFound,
                LeadRepositoryError::DatabaseError(msg) => {
                    error!("Failed to update lead {}: {}", command.id(), msg);
                    UpdateLeadStatusError::RepositoryError(msg)
                }
            })?;

        info!("Lead {} moved to '{}'", command.id(), command.status());
        Ok(())
    }
}
