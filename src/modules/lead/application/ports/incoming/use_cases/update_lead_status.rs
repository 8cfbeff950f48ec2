use async_trait::async_trait;

use crate::modules::lead::application::domain::entities::{InvalidLeadStatus, LeadStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateLeadStatusCommand {
    id: i64,
    status: LeadStatus,
}

impl UpdateLeadStatusCommand {
    /// Fails before anything reaches persistence when the status is outside the pipeline.
    pub fn new(id: i64, raw_status: &str) -> Result<Self, InvalidLeadStatus> {
        Ok(Self {
            id,
            status: raw_status.parse()?,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn status(&self) -> LeadStatus {
        self.status
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateLeadStatusError {
    #[error("Lead not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateLeadStatusUseCase: Send + Sync {
    async fn execute(&self, command: UpdateLeadStatusCommand)
        -> Result<(), UpdateLeadStatusError>;
}
