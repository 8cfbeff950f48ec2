use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::modules::asset::application::domain::entities::SCREENSHOT_PREFIX;

/// Widths of the `payments` VARCHAR columns.
pub mod limits {
    pub const STUDENT_NAME: usize = 150;
    pub const PHONE: usize = 30;
    pub const PROJECT_NAME: usize = 200;
    /// Numeric text; the parsed value is bounded separately.
    pub const AMOUNT: usize = 32;
}

/// Manual verification state of a payment proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Verified,
    Rejected,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Pending,
        PaymentStatus::Verified,
        PaymentStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Verified => "verified",
            PaymentStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid status `{0}`. Allowed: pending, verified, rejected")]
pub struct InvalidPaymentStatus(pub String);

impl FromStr for PaymentStatus {
    type Err = InvalidPaymentStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| InvalidPaymentStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub id: i64,
    pub student_name: String,
    pub phone: String,
    pub project_name: String,
    pub amount: Decimal,
    /// Asset name under `/api/assets/`.
    pub screenshot: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Unguessable asset name for a freshly uploaded screenshot.
pub fn screenshot_asset_name() -> String {
    format!("{SCREENSHOT_PREFIX}{}", Uuid::new_v4())
}
