use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::lead::adapter::outgoing::sea_orm_entity::{
    Column as LeadColumn, Entity as LeadEntity, LeadStatusColumn,
};
use crate::modules::payment::adapter::outgoing::sea_orm_entity::{
    Column as PaymentColumn, Entity as PaymentEntity, PaymentStatusColumn,
};
use crate::modules::project::adapter::outgoing::sea_orm_entity::Entity as ProjectEntity;
use crate::modules::review::adapter::outgoing::sea_orm_entity::{
    Column as ReviewColumn, Entity as ReviewEntity,
};
use crate::modules::stats::application::{
    domain::entities::DashboardStats,
    ports::outgoing::{StatsQuery, StatsQueryError},
};

#[derive(Debug, Clone)]
pub struct StatsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> StatsQueryError {
    StatsQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl StatsQuery for StatsQueryPostgres {
    async fn dashboard_counts(&self) -> Result<DashboardStats, StatsQueryError> {
        let db = &*self.db;

        let total_leads = LeadEntity::find().count(db).await.map_err(map_db_err)?;
        let verified_payments = PaymentEntity::find()
            .filter(PaymentColumn::Status.eq(PaymentStatusColumn::Verified))
            .count(db)
            .await
            .map_err(map_db_err)?;
        let total_projects = ProjectEntity::find().count(db).await.map_err(map_db_err)?;
        let approved_reviews = ReviewEntity::find()
            .filter(ReviewColumn::IsApproved.eq(true))
            .count(db)
            .await
            .map_err(map_db_err)?;
        let pending_payments = PaymentEntity::find()
            .filter(PaymentColumn::Status.eq(PaymentStatusColumn::Pending))
            .count(db)
            .await
            .map_err(map_db_err)?;
        let new_leads = LeadEntity::find()
            .filter(LeadColumn::Status.eq(LeadStatusColumn::New))
            .count(db)
            .await
            .map_err(map_db_err)?;

        Ok(DashboardStats {
            total_leads,
            verified_payments,
            total_projects,
            approved_reviews,
            pending_payments,
            new_leads,
        })
    }
}
