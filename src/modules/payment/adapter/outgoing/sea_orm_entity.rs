use sea_orm::entity::prelude::*;

use crate::modules::payment::application::domain::entities::{Payment, PaymentStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum PaymentStatusColumn {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "verified")]
    Verified,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl From<PaymentStatus> for PaymentStatusColumn {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => Self::Pending,
            PaymentStatus::Verified => Self::Verified,
            PaymentStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<PaymentStatusColumn> for PaymentStatus {
    fn from(column: PaymentStatusColumn) -> Self {
        match column {
            PaymentStatusColumn::Pending => Self::Pending,
            PaymentStatusColumn::Verified => Self::Verified,
            PaymentStatusColumn::Rejected => Self::Rejected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_name: String,
    pub phone: String,
    pub project_name: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub amount: Decimal,
    #[sea_orm(nullable)]
    pub screenshot: Option<String>,
    pub status: PaymentStatusColumn,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn into_payment(self) -> Payment {
        Payment {
            id: self.id,
            student_name: self.student_name,
            phone: self.phone,
            project_name: self.project_name,
            amount: self.amount,
            screenshot: self.screenshot,
            status: self.status.into(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
