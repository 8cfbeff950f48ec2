use std::sync::Arc;

use crate::modules::stats::application::ports::incoming::use_cases::GetStatsUseCase;

#[derive(Clone)]
pub struct StatsUseCases {
    pub get: Arc<dyn GetStatsUseCase + Send + Sync>,
}
