use async_trait::async_trait;

use crate::modules::payment::application::{
    domain::entities::Payment,
    ports::{
        incoming::use_cases::{GetPaymentsError, GetPaymentsUseCase},
        outgoing::PaymentQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetPaymentsService<Q>
where
    Q: PaymentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetPaymentsService<Q>
where
    Q: PaymentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPaymentsUseCase for GetPaymentsService<Q>
where
    Q: PaymentQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Payment>, GetPaymentsError> {
        self.query
            .list_newest_first()
            .await
            .map_err(|e| GetPaymentsError::QueryFailed(e.to_string()))
    }
}
