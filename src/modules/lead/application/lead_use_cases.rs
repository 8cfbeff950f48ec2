use std::sync::Arc;

use crate::modules::lead::application::ports::incoming::use_cases::{
    DeleteLeadUseCase, GetLeadsUseCase, SubmitLeadUseCase, UpdateLeadStatusUseCase,
};

#[derive(Clone)]
pub struct LeadUseCases {
    pub submit: Arc<dyn SubmitLeadUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetLeadsUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateLeadStatusUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteLeadUseCase + Send + Sync>,
}
