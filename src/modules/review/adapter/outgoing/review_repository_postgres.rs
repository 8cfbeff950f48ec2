use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use std::sync::Arc;

use crate::modules::review::application::{
    domain::entities::Review,
    ports::outgoing::{NewReview, ReviewRepository, ReviewRepositoryError},
};

use super::sea_orm_entity::{
    ActiveModel as ReviewActiveModel, Column as ReviewColumn, Entity as ReviewEntity,
};

#[derive(Debug, Clone)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn insert_review(&self, review: NewReview) -> Result<Review, ReviewRepositoryError> {
        let active = ReviewActiveModel {
            id: NotSet,
            student_name: Set(review.student_name),
            college_name: Set(review.college_name),
            year_of_study: Set(review.year_of_study),
            project_name: Set(review.project_name),
            rating: Set(review.rating),
            experience: Set(review.experience),
            pricing_review: Set(review.pricing_review),
            is_approved: Set(review.is_approved),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = ReviewEntity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.into_review())
    }

    async fn set_approval(&self, id: i64, approved: bool) -> Result<(), ReviewRepositoryError> {
        let result = ReviewEntity::update_many()
            .set(ReviewActiveModel {
                is_approved: Set(approved),
                ..Default::default()
            })
            .filter(ReviewColumn::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ReviewRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_review(&self, id: i64) -> Result<(), ReviewRepositoryError> {
        let result = ReviewEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| ReviewRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ReviewRepositoryError::NotFound);
        }

        Ok(())
    }
}
