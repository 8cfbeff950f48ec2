use std::sync::Arc;

use crate::modules::review::application::ports::incoming::use_cases::{
    CreateAdminReviewUseCase, DeleteReviewUseCase, GetAllReviewsUseCase,
    GetApprovedReviewsUseCase, SetReviewApprovalUseCase, SubmitReviewUseCase,
};

#[derive(Clone)]
pub struct ReviewUseCases {
    pub submit: Arc<dyn SubmitReviewUseCase + Send + Sync>,
    pub get_approved: Arc<dyn GetApprovedReviewsUseCase + Send + Sync>,
    pub get_all: Arc<dyn GetAllReviewsUseCase + Send + Sync>,
    pub set_approval: Arc<dyn SetReviewApprovalUseCase + Send + Sync>,
    pub create_admin: Arc<dyn CreateAdminReviewUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteReviewUseCase + Send + Sync>,
}
