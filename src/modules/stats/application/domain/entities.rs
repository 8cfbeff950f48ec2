use serde::Serialize;
use utoipa::ToSchema;

/// Back-office dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_leads: u64,
    pub verified_payments: u64,
    pub total_projects: u64,
    pub approved_reviews: u64,
    pub pending_payments: u64,
    pub new_leads: u64,
}
