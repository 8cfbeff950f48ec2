use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};
use std::sync::Arc;

use crate::modules::review::application::{
    domain::entities::Review,
    ports::outgoing::{ReviewQuery, ReviewQueryError},
};

use super::sea_orm_entity::{Column as ReviewColumn, Entity as ReviewEntity};

#[derive(Debug, Clone)]
pub struct ReviewQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch(&self, select: Select<ReviewEntity>) -> Result<Vec<Review>, ReviewQueryError> {
        let models = select
            .order_by_desc(ReviewColumn::CreatedAt)
            .order_by_desc(ReviewColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| ReviewQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.into_review()).collect())
    }
}

#[async_trait]
impl ReviewQuery for ReviewQueryPostgres {
    async fn list_approved(&self) -> Result<Vec<Review>, ReviewQueryError> {
        self.fetch(ReviewEntity::find().filter(ReviewColumn::IsApproved.eq(true)))
            .await
    }

    async fn list_all(&self) -> Result<Vec<Review>, ReviewQueryError> {
        self.fetch(ReviewEntity::find()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use super::super::sea_orm_entity::Model as ReviewModel;

    fn model(id: i64, is_approved: bool, minutes_ago: i64) -> ReviewModel {
        ReviewModel {
            id,
            student_name: format!("Student {id}"),
            college_name: "VIT".into(),
            year_of_study: "2nd".into(),
            project_name: "IoT dashboard".into(),
            rating: 4,
            experience: "Helpful mentors".into(),
            pricing_review: None,
            is_approved,
            created_at: (Utc::now() - Duration::minutes(minutes_ago)).fixed_offset(),
        }
    }

    #[tokio::test]
    async fn maps_rows_to_domain_reviews() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(2, false, 1), model(1, true, 60)]])
            .into_connection();
        let query = ReviewQueryPostgres::new(Arc::new(db));

        let reviews = query.list_all().await.unwrap();

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].id, 2);
        assert!(!reviews[0].is_approved);
        assert_eq!(reviews[1].rating, 4);
    }

    #[tokio::test]
    async fn approved_listing_surfaces_query_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("Connection failed".into())])
            .into_connection();
        let query = ReviewQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list_approved().await,
            Err(ReviewQueryError::DatabaseError(_))
        ));
    }
}
