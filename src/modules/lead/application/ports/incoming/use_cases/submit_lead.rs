use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::lead::application::{
    domain::entities::{limits, Lead},
    ports::outgoing::NewLead,
};
use crate::shared::validation::{optional_text, RequiredFields, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Submission (public contact form)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LeadSubmission {
    pub name: Option<String>,
    pub college: Option<String>,
    pub branch: Option<String>,
    pub project_domain: Option<String>,
    pub budget: Option<String>,
    pub deadline: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SubmitLeadCommand {
    lead: NewLead,
}

impl SubmitLeadCommand {
    pub fn new(submission: LeadSubmission) -> Result<Self, ValidationError> {
        let mut required = RequiredFields::new();

        let lead = NewLead {
            name: required.text("name", submission.name, limits::NAME),
            college: required.text("college", submission.college, limits::COLLEGE),
            branch: required.text("branch", submission.branch, limits::BRANCH),
            project_domain: required.text(
                "project_domain",
                submission.project_domain,
                limits::PROJECT_DOMAIN,
            ),
            budget: required.text("budget", submission.budget, limits::BUDGET),
            deadline: required.text("deadline", submission.deadline, limits::DEADLINE),
            phone: required.text("phone", submission.phone, limits::PHONE),
            message: optional_text(submission.message),
        };

        required.finish()?;

        Ok(Self { lead })
    }

    pub fn lead(&self) -> &NewLead {
        &self.lead
    }

    pub fn into_new_lead(self) -> NewLead {
        self.lead
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitLeadError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitLeadUseCase: Send + Sync {
    async fn execute(&self, command: SubmitLeadCommand) -> Result<Lead, SubmitLeadError>;
}
