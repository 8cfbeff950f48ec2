use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Widths of the `leads` VARCHAR columns.
pub mod limits {
    pub const NAME: usize = 150;
    pub const COLLEGE: usize = 200;
    pub const BRANCH: usize = 150;
    pub const PROJECT_DOMAIN: usize = 150;
    pub const BUDGET: usize = 100;
    pub const DEADLINE: usize = 100;
    pub const PHONE: usize = 30;
}

/// Sales pipeline stage of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    InProgress,
    Completed,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::InProgress,
        LeadStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::InProgress => "in_progress",
            LeadStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid status `{0}`. Allowed: new, contacted, in_progress, completed")]
pub struct InvalidLeadStatus(pub String);

impl FromStr for LeadStatus {
    type Err = InvalidLeadStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| InvalidLeadStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub college: String,
    pub branch: String,
    pub project_domain: String,
    pub budget: String,
    pub deadline: String,
    pub phone: String,
    pub message: Option<String>,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}
