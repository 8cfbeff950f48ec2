use async_trait::async_trait;

use crate::modules::stats::application::domain::entities::DashboardStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetStatsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardStats, GetStatsError>;
}
