use sea_orm::entity::prelude::*;

use crate::modules::project::application::domain::entities::Project;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub category: String,
    pub year_type: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
    #[sea_orm(column_type = "Text", nullable)]
    pub features: Option<String>,
    pub is_popular: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn into_project(self) -> Project {
        Project {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            year_type: self.year_type,
            price: self.price,
            features: self.features,
            is_popular: self.is_popular,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
