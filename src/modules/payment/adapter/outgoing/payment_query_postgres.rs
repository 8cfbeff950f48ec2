use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::payment::application::{
    domain::entities::Payment,
    ports::outgoing::{PaymentQuery, PaymentQueryError},
};

use super::sea_orm_entity::{Column as PaymentColumn, Entity as PaymentEntity};

#[derive(Debug, Clone)]
pub struct PaymentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PaymentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentQuery for PaymentQueryPostgres {
    async fn list_newest_first(&self) -> Result<Vec<Payment>, PaymentQueryError> {
        let models = PaymentEntity::find()
            .order_by_desc(PaymentColumn::CreatedAt)
            .order_by_desc(PaymentColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| PaymentQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.into_payment()).collect())
    }
}
