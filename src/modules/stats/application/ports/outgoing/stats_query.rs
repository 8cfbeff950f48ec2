use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::DashboardStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait StatsQuery: Send + Sync {
    async fn dashboard_counts(&self) -> Result<DashboardStats, StatsQueryError>;
}
