use async_trait::async_trait;

use crate::modules::review::application::domain::entities::Review;

#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub student_name: String,
    pub college_name: String,
    pub year_of_study: String,
    pub project_name: String,
    pub rating: i16,
    pub experience: String,
    pub pricing_review: Option<String>,
    pub is_approved: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewRepositoryError {
    #[error("Review not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert_review(&self, review: NewReview) -> Result<Review, ReviewRepositoryError>;

    async fn set_approval(&self, id: i64, approved: bool) -> Result<(), ReviewRepositoryError>;

    async fn delete_review(&self, id: i64) -> Result<(), ReviewRepositoryError>;
}
