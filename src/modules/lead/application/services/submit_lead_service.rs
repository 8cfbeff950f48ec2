use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::lead::application::{
    domain::entities::Lead,
    ports::{
        incoming::use_cases::{SubmitLeadCommand, SubmitLeadError, SubmitLeadUseCase},
        outgoing::LeadRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SubmitLeadService<R>
where
    R: LeadRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitLeadService<R>
where
    R: LeadRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitLeadUseCase for SubmitLeadService<R>
where
    R: LeadRepository + Send + Sync,
{
    async fn execute(&self, command: SubmitLeadCommand) -> Result<Lead, SubmitLeadError> {
        let lead = self
            .repository
            .insert_lead(command.into_new_lead())
            .await
            .map_err(|e| {
                error!("Failed to store lead: {}", e);
                SubmitLeadError::RepositoryError(e.to_string())
            })?;

        info!("Lead {} submitted for domain '{}'", lead.id, lead.project_domain);
        Ok(lead)
    }
}
