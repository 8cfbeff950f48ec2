use async_trait::async_trait;

use crate::modules::asset::application::domain::entities::{Asset, AssetName};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BundledAssetError {
    #[error("Reading bundled asset failed: {0}")]
    Io(String),
}

/// Read-only images shipped alongside the binary.
#[async_trait]
pub trait BundledAssets: Send + Sync {
    async fn find_bundled(&self, name: &AssetName) -> Result<Option<Asset>, BundledAssetError>;
}
