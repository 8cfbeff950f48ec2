pub mod asset_repository;
pub mod bundled_assets;

pub use asset_repository::{AssetRepository, AssetRepositoryError};
pub use bundled_assets::{BundledAssetError, BundledAssets};
