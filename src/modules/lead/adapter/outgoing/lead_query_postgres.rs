use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::lead::application::{
    domain::entities::Lead,
    ports::outgoing::{LeadQuery, LeadQueryError},
};

use super::sea_orm_entity::{Column as LeadColumn, Entity as LeadEntity};

#[derive(Debug, Clone)]
pub struct LeadQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LeadQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LeadQuery for LeadQueryPostgres {
    async fn list_newest_first(&self) -> Result<Vec<Lead>, LeadQueryError> {
        let models = LeadEntity::find()
            .order_by_desc(LeadColumn::CreatedAt)
            .order_by_desc(LeadColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| LeadQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.into_lead()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use super::super::sea_orm_entity::{LeadStatusColumn, Model as LeadModel};
    use crate::modules::lead::application::domain::entities::LeadStatus;

    fn model(id: i64, status: LeadStatusColumn, minutes_ago: i64) -> LeadModel {
        LeadModel {
            id,
            name: format!("Lead {id}"),
            college: "BITS".into(),
            branch: "EEE".into(),
            project_domain: "frontend".into(),
            budget: "flexible".into(),
            deadline: "march".into(),
            phone: "9123".into(),
            message: Some("hello".into()),
            status,
            created_at: (Utc::now() - Duration::minutes(minutes_ago)).fixed_offset(),
        }
    }

    #[tokio::test]
    async fn maps_rows_to_domain_leads() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model(2, LeadStatusColumn::InProgress, 1),
                model(1, LeadStatusColumn::New, 30),
            ]])
            .into_connection();
        let query = LeadQueryPostgres::new(Arc::new(db));

        let leads = query.list_newest_first().await.unwrap();

        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].id, 2);
        assert_eq!(leads[0].status, LeadStatus::InProgress);
        assert_eq!(leads[1].message.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn query_error_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("Connection failed".into())])
            .into_connection();
        let query = LeadQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list_newest_first().await,
            Err(LeadQueryError::DatabaseError(_))
        ));
    }
}
