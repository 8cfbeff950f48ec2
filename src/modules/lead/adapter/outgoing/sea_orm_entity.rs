use sea_orm::entity::prelude::*;

use crate::modules::lead::application::domain::entities::{Lead, LeadStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum LeadStatusColumn {
    #[sea_orm(string_value = "new")]
    New,
    #[sea_orm(string_value = "contacted")]
    Contacted,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl From<LeadStatus> for LeadStatusColumn {
    fn from(status: LeadStatus) -> Self {
        match status {
            LeadStatus::New => Self::New,
            LeadStatus::Contacted => Self::Contacted,
            LeadStatus::InProgress => Self::InProgress,
            LeadStatus::Completed => Self::Completed,
        }
    }
}

impl From<LeadStatusColumn> for LeadStatus {
    fn from(column: LeadStatusColumn) -> Self {
        match column {
            LeadStatusColumn::New => Self::New,
            LeadStatusColumn::Contacted => Self::Contacted,
            LeadStatusColumn::InProgress => Self::InProgress,
            LeadStatusColumn::Completed => Self::Completed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub college: String,
    pub branch: String,
    pub project_domain: String,
    pub budget: String,
    pub deadline: String,
    pub phone: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub status: LeadStatusColumn,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn into_lead(self) -> Lead {
        Lead {
            id: self.id,
            name: self.name,
            college: self.college,
            branch: self.branch,
            project_domain: self.project_domain,
            budget: self.budget,
            deadline: self.deadline,
            phone: self.phone,
            message: self.message,
            status: self.status.into(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
