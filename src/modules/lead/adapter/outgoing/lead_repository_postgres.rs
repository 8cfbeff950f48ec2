use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use std::sync::Arc;

use crate::modules::lead::application::{
    domain::entities::{Lead, LeadStatus},
    ports::outgoing::{LeadRepository, LeadRepositoryError, NewLead},
};

use super::sea_orm_entity::{
    ActiveModel as LeadActiveModel, Column as LeadColumn, Entity as LeadEntity, LeadStatusColumn,
};

#[derive(Debug, Clone)]
pub struct LeadRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LeadRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LeadRepository for LeadRepositoryPostgres {
    async fn insert_lead(&self, lead: NewLead) -> Result<Lead, LeadRepositoryError> {
        let active = LeadActiveModel {
            id: NotSet,
            name: Set(lead.name),
            college: Set(lead.college),
            branch: Set(lead.branch),
            project_domain: Set(lead.project_domain),
            budget: Set(lead.budget),
            deadline: Set(lead.deadline),
            phone: Set(lead.phone),
            message: Set(lead.message),
            status: Set(LeadStatusColumn::New),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = LeadEntity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| LeadRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.into_lead())
    }

    async fn update_status(&self, id: i64, status: LeadStatus) -> Result<(), LeadRepositoryError> {
        let result = LeadEntity::update_many()
            .set(LeadActiveModel {
                status: Set(status.into()),
                ..Default::default()
            })
            .filter(LeadColumn::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(|e| LeadRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(LeadRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_lead(&self, id: i64) -> Result<(), LeadRepositoryError> {
        let result = LeadEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| LeadRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(LeadRepositoryError::NotFound);
        }

        Ok(())
    }
}
