use async_trait::async_trait;

use crate::modules::lead::application::domain::entities::{Lead, LeadStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub college: String,
    pub branch: String,
    pub project_domain: String,
    pub budget: String,
    pub deadline: String,
    pub phone: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LeadRepositoryError {
    #[error("Lead not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Persists with status `new`.
    async fn insert_lead(&self, lead: NewLead) -> Result<Lead, LeadRepositoryError>;

    async fn update_status(&self, id: i64, status: LeadStatus) -> Result<(), LeadRepositoryError>;

    async fn delete_lead(&self, id: i64) -> Result<(), LeadRepositoryError>;
}
