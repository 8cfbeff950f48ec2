use async_trait::async_trait;
use tracing::{debug, error};

use crate::modules::asset::application::{
    domain::entities::{Asset, AssetName},
    ports::{
        incoming::use_cases::{GetAssetError, GetAssetUseCase},
        outgoing::{AssetRepository, BundledAssets},
    },
};

#[derive(Debug, Clone)]
pub struct GetAssetService<R, B>
where
    R: AssetRepository + Send + Sync,
    B: BundledAssets + Send + Sync,
{
    repository: R,
    bundled: B,
}

impl<R, B> GetAssetService<R, B>
where
    R: AssetRepository + Send + Sync,
    B: BundledAssets + Send + Sync,
{
    pub fn new(repository: R, bundled: B) -> Self {
        Self {
            repository,
            bundled,
        }
    }
}

#[async_trait]
impl<R, B> GetAssetUseCase for GetAssetService<R, B>
where
    R: AssetRepository + Send + Sync,
    B: BundledAssets + Send + Sync,
{
    async fn execute(&self, raw_name: &str) -> Result<Asset, GetAssetError> {
        let name = AssetName::parse(raw_name).map_err(|_| {
            debug!("Rejected asset name '{}'", raw_name);
            GetAssetError::NotFound
        })?;

        let stored = self.repository.find_asset(&name).await.map_err(|e| {
            error!("Asset lookup for '{}' failed: {}", name, e);
            GetAssetError::LookupFailed(e.to_string())
        })?;
        if let Some(asset) = stored {
            return Ok(asset);
        }

        self.bundled
            .find_bundled(&name)
            .await
            .map_err(|e| {
                error!("Bundled asset lookup for '{}' failed: {}", name, e);
                GetAssetError::LookupFailed(e.to_string())
            })?
            .ok_or(GetAssetError::NotFound)
    }
}
