use async_trait::async_trait;

use crate::modules::lead::application::{
    domain::entities::Lead,
    ports::{
        incoming::use_cases::{GetLeadsError, GetLeadsUseCase},
        outgoing::LeadQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetLeadsService<Q>
where
    Q: LeadQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetLeadsService<Q>
where
    Q: LeadQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetLeadsUseCase for GetLeadsService<Q>
where
    Q: LeadQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Lead>, GetLeadsError> {
        self.query
            .list_newest_first()
            .await
            .map_err(|e| GetLeadsError::QueryFailed(e.to_string()))
    }
}
