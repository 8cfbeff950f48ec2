use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionTrait,
};
use std::sync::Arc;

use crate::modules::asset::adapter::outgoing::sea_orm_entity::{
    ActiveModel as AssetActiveModel, Entity as AssetEntity,
};
use crate::modules::payment::application::{
    domain::entities::{Payment, PaymentStatus},
    ports::outgoing::{NewPayment, PaymentRepository, PaymentRepositoryError},
};

use super::sea_orm_entity::{
    ActiveModel as PaymentActiveModel, Column as PaymentColumn, Entity as PaymentEntity,
    PaymentStatusColumn,
};

fn db_error(e: DbErr) -> PaymentRepositoryError {
    PaymentRepositoryError::DatabaseError(e.to_string())
}

#[derive(Debug, Clone)]
pub struct PaymentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PaymentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentRepository for PaymentRepositoryPostgres {
    async fn insert_payment(&self, payment: NewPayment) -> Result<Payment, PaymentRepositoryError> {
        let now = Utc::now().fixed_offset();
        let txn = self.db.begin().await.map_err(db_error)?;

        let screenshot_name = match payment.screenshot {
            Some(shot) => {
                let (mime_type, data) = shot.image.into_parts();
                AssetEntity::insert(AssetActiveModel {
                    asset_name: Set(shot.asset_name.clone()),
                    mime_type: Set(mime_type),
                    data: Set(data),
                    created_at: Set(now),
                    updated_at: Set(now),
                })
                .exec_without_returning(&txn)
                .await
                .map_err(db_error)?;
                Some(shot.asset_name)
            }
            None => None,
        };

        let inserted = PaymentEntity::insert(PaymentActiveModel {
            id: NotSet,
            student_name: Set(payment.student_name),
            phone: Set(payment.phone),
            project_name: Set(payment.project_name),
            amount: Set(payment.amount),
            screenshot: Set(screenshot_name),
            status: Set(PaymentStatusColumn::Pending),
            created_at: Set(now),
        })
        .exec_with_returning(&txn)
        .await
        .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;

        Ok(inserted.into_payment())
    }

    async fn update_status(
        &self,
        id: i64,
        status: PaymentStatus,
    ) -> Result<(), PaymentRepositoryError> {
        let result = PaymentEntity::update_many()
            .set(PaymentActiveModel {
                status: Set(status.into()),
                ..Default::default()
            })
            .filter(PaymentColumn::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(PaymentRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn delete_payment(&self, id: i64) -> Result<(), PaymentRepositoryError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let existing = PaymentEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or(PaymentRepositoryError::NotFound)?;

        PaymentEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error)?;

        if let Some(asset_name) = existing.screenshot {
            AssetEntity::delete_by_id(asset_name)
                .exec(&txn)
                .await
                .map_err(db_error)?;
        }

        txn.commit().await.map_err(db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::super::sea_orm_entity::Model as PaymentModel;
    use crate::modules::asset::application::domain::image_policy::ImageUpload;
    use crate::modules::payment::application::ports::outgoing::Screenshot;

    fn payment_model(id: i64, screenshot: Option<&str>) -> PaymentModel {
        PaymentModel {
            id,
            student_name: "Asha".into(),
            phone: "98".into(),
            project_name: "Chatbot".into(),
            amount: Decimal::new(250000, 2),
            screenshot: screenshot.map(str::to_string),
            status: PaymentStatusColumn::Pending,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn new_payment(screenshot: Option<&str>) -> NewPayment {
        NewPayment {
            student_name: "Asha".into(),
            phone: "98".into(),
            project_name: "Chatbot".into(),
            amount: Decimal::new(2500, 0),
            screenshot: screenshot.map(|name| Screenshot {
                asset_name: name.to_string(),
                image: ImageUpload::check("image/png", None, vec![1, 2, 3]).unwrap(),
            }),
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn insert_with_screenshot_stores_asset_then_payment() {
        let name = "payment-screenshot-abc";
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(1)])
            .append_query_results(vec![vec![payment_model(1, Some(name))]])
            .into_connection();
        let repo = PaymentRepositoryPostgres::new(Arc::new(db));

        let payment = repo.insert_payment(new_payment(Some(name))).await.unwrap();

        assert_eq!(payment.id, 1);
        assert_eq!(payment.screenshot.as_deref(), Some(name));
        assert_eq!(payment.status, PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn insert_without_screenshot_skips_asset() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![payment_model(2, None)]])
            .into_connection();
        let repo = PaymentRepositoryPostgres::new(Arc::new(db));

        let payment = repo.insert_payment(new_payment(None)).await.unwrap();

        assert!(payment.screenshot.is_none());
    }

    #[tokio::test]
    async fn failed_asset_insert_aborts_payment() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom("value too long".into())])
            .into_connection();
        let repo = PaymentRepositoryPostgres::new(Arc::new(db));

        let result = repo.insert_payment(new_payment(Some("payment-screenshot-x"))).await;

        assert!(matches!(result, Err(PaymentRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn update_status_without_match_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(0)])
            .into_connection();
        let repo = PaymentRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.update_status(8, PaymentStatus::Verified).await,
            Err(PaymentRepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn delete_removes_payment_and_screenshot() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![payment_model(4, Some("payment-screenshot-y"))]])
            .append_exec_results(vec![exec(1), exec(1)])
            .into_connection();
        let repo = PaymentRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete_payment(4).await.is_ok());
    }

    #[tokio::test]
    async fn delete_of_missing_payment_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<PaymentModel>::new()])
            .into_connection();
        let repo = PaymentRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.delete_payment(4).await,
            Err(PaymentRepositoryError::NotFound)
        ));
    }
}
