use sea_orm::entity::prelude::*;

use crate::modules::asset::application::domain::entities::{Asset, AssetName, InvalidAssetName};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_assets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub asset_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn into_asset(self) -> Result<Asset, InvalidAssetName> {
        Ok(Asset {
            name: AssetName::parse(&self.asset_name)?,
            mime_type: self.mime_type,
            data: self.data,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
