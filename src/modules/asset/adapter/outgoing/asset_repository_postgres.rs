use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::asset::application::{
    domain::entities::{Asset, AssetName},
    ports::outgoing::{AssetRepository, AssetRepositoryError},
};

use super::sea_orm_entity::{ActiveModel as AssetActiveModel, Column as AssetColumn, Entity as AssetEntity};

#[derive(Debug, Clone)]
pub struct AssetRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AssetRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AssetRepository for AssetRepositoryPostgres {
    async fn find_asset(&self, name: &AssetName) -> Result<Option<Asset>, AssetRepositoryError> {
        let model = AssetEntity::find_by_id(name.as_str().to_string())
            .one(&*self.db)
            .await
            .map_err(|e| AssetRepositoryError::DatabaseError(e.to_string()))?;

        model
            .map(|m| m.into_asset())
            .transpose()
            .map_err(|e| AssetRepositoryError::DatabaseError(e.to_string()))
    }

    async fn upsert_asset(&self, asset: Asset) -> Result<(), AssetRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = AssetActiveModel {
            asset_name: Set(asset.name.as_str().to_string()),
            mime_type: Set(asset.mime_type),
            data: Set(asset.data),
            created_at: Set(now),
            updated_at: Set(now),
        };

        AssetEntity::insert(active)
            .on_conflict(
                OnConflict::column(AssetColumn::AssetName)
                    .update_columns([AssetColumn::MimeType, AssetColumn::Data, AssetColumn::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| AssetRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
