use sea_orm::entity::prelude::*;

use crate::modules::review::application::domain::entities::Review;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_name: String,
    pub college_name: String,
    pub year_of_study: String,
    pub project_name: String,
    pub rating: i16,
    #[sea_orm(column_type = "Text")]
    pub experience: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub pricing_review: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn into_review(self) -> Review {
        Review {
            id: self.id,
            student_name: self.student_name,
            college_name: self.college_name,
            year_of_study: self.year_of_study,
            project_name: self.project_name,
            rating: self.rating,
            experience: self.experience,
            pricing_review: self.pricing_review,
            is_approved: self.is_approved,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
