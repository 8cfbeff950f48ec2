use async_trait::async_trait;

use crate::modules::asset::application::domain::{
    entities::{AssetName, InvalidAssetName},
    image_policy::ImageUpload,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PutAssetCommandError {
    #[error(transparent)]
    InvalidName(#[from] InvalidAssetName),

    #[error("Asset name `{0}` is reserved for payment screenshots")]
    ReservedName(String),
}

#[derive(Debug, Clone)]
pub struct PutAssetCommand {
    name: AssetName,
    image: ImageUpload,
}

impl PutAssetCommand {
    /// Screenshot names are refused so an upload never replaces a customer's proof.
    pub fn new(raw_name: &str, image: ImageUpload) -> Result<Self, PutAssetCommandError> {
        let name = AssetName::parse(raw_name)?;
        if name.is_screenshot() {
            return Err(PutAssetCommandError::ReservedName(name.to_string()));
        }
        Ok(Self { name, image })
    }

    pub fn name(&self) -> &AssetName {
        &self.name
    }

    pub fn image(&self) -> &ImageUpload {
        &self.image
    }

    pub fn into_parts(self) -> (AssetName, ImageUpload) {
        (self.name, self.image)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PutAssetError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PutAssetUseCase: Send + Sync {
    async fn execute(&self, command: PutAssetCommand) -> Result<(), PutAssetError>;
}
