mod get_asset_service;
mod put_asset_service;

pub use get_asset_service::GetAssetService;
pub use put_asset_service::PutAssetService;
