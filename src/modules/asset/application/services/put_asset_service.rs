use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::asset::application::{
    domain::entities::Asset,
    ports::{
        incoming::use_cases::{PutAssetCommand, PutAssetError, PutAssetUseCase},
        outgoing::AssetRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PutAssetService<R>
where
    R: AssetRepository + Send + Sync,
{
    repository: R,
}

impl<R> PutAssetService<R>
where
    R: AssetRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PutAssetUseCase for PutAssetService<R>
where
    R: AssetRepository + Send + Sync,
{
    async fn execute(&self, command: PutAssetCommand) -> Result<(), PutAssetError> {
        let (name, image) = command.into_parts();
        let size = image.len();
        let (mime_type, data) = image.into_parts();

        self.repository
            .upsert_asset(Asset {
                name: name.clone(),
                mime_type,
                data,
            })
            .await
            .map_err(|e| {
                error!("Storing asset '{}' failed: {}", name, e);
                PutAssetError::RepositoryError(e.to_string())
            })?;

        info!("Asset '{}' stored ({} bytes)", name, size);
        Ok(())
    }
}
