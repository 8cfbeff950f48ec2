use async_trait::async_trait;
use tracing::error;

use crate::modules::stats::application::{
    domain::entities::DashboardStats,
    ports::{
        incoming::use_cases::{GetStatsError, GetStatsUseCase},
        outgoing::StatsQuery,
    },
};

/// Counts are read fresh on every call.
#[derive(Debug, Clone)]
pub struct GetStatsService<Q>
where
    Q: StatsQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetStatsService<Q>
where
    Q: StatsQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetStatsUseCase for GetStatsService<Q>
where
    Q: StatsQuery + Send + Sync,
{
    async fn execute(&self) -> Result<DashboardStats, GetStatsError> {
        self.query.dashboard_counts().await.map_err(|e| {
            error!("Dashboard counts failed: {}", e);
            GetStatsError::QueryFailed(e.to_string())
        })
    }
}
