use async_trait::async_trait;

use crate::modules::asset::application::domain::entities::{Asset, AssetName};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssetRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AssetRepository: Send + Sync {
    async fn find_asset(&self, name: &AssetName) -> Result<Option<Asset>, AssetRepositoryError>;

    /// Insert, or replace mime type and bytes of an existing asset.
    async fn upsert_asset(&self, asset: Asset) -> Result<(), AssetRepositoryError>;
}
