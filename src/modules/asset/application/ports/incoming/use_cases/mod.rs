mod get_asset;
mod put_asset;

pub use get_asset::*;
pub use put_asset::*;
