use async_trait::async_trait;

use crate::modules::asset::application::domain::entities::Asset;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAssetError {
    #[error("Asset not found")]
    NotFound,

    #[error("Asset lookup failed: {0}")]
    LookupFailed(String),
}

#[async_trait]
pub trait GetAssetUseCase: Send + Sync {
    /// Database first, then the bundled files. Malformed names are `NotFound`.
    async fn execute(&self, raw_name: &str) -> Result<Asset, GetAssetError>;
}
