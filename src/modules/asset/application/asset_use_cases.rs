use std::sync::Arc;

use crate::modules::asset::application::ports::incoming::use_cases::{
    GetAssetUseCase, PutAssetUseCase,
};

#[derive(Clone)]
pub struct AssetUseCases {
    pub get: Arc<dyn GetAssetUseCase + Send + Sync>,
    pub put: Arc<dyn PutAssetUseCase + Send + Sync>,
}
