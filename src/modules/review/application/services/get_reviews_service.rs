use async_trait::async_trait;

use crate::modules::review::application::{
    domain::entities::Review,
    ports::{
        incoming::use_cases::{GetAllReviewsUseCase, GetApprovedReviewsUseCase, GetReviewsError},
        outgoing::ReviewQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetApprovedReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetApprovedReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetApprovedReviewsUseCase for GetApprovedReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Review>, GetReviewsError> {
        self.query
            .list_approved()
            .await
            .map_err(|e| GetReviewsError::QueryFailed(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct GetAllReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetAllReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAllReviewsUseCase for GetAllReviewsService<Q>
where
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Review>, GetReviewsError> {
        self.query
            .list_all()
            .await
            .map_err(|e| GetReviewsError::QueryFailed(e.to_string()))
    }
}
