pub mod asset_repository_postgres;
pub mod sea_orm_entity;
pub mod static_asset_dir;

pub use asset_repository_postgres::AssetRepositoryPostgres;
pub use static_asset_dir::StaticAssetDir;
