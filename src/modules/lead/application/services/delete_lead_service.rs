use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::lead::application::ports::{
    incoming::use_cases::{DeleteLeadError, DeleteLeadUseCase},
    outgoing::{LeadRepository, LeadRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteLeadService<R>
where
    R: LeadRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteLeadService<R>
where
    R: LeadRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteLeadUseCase for DeleteLeadService<R>
where
    R: LeadRepository + Send + Sync,
{
    async fn execute(&self, lead_id: i64) -> Result<(), DeleteLeadError> {
        self.repository
            .delete_lead(lead_id)
            .await
            .map_err(|e| match e {
                LeadRepositoryError::NotFound => DeleteLeadError::NotFound,
                LeadRepositoryError::DatabaseError(msg) => {
                    error!("Failed to delete lead {}: {}", lead_id, msg);
                    DeleteLeadError::RepositoryError(msg)
                }
            })?;

        info!("Lead {} deleted", lead_id);
        Ok(())
    }
}
