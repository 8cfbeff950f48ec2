use std::sync::Arc;

use crate::modules::payment::application::ports::incoming::use_cases::{
    DeletePaymentUseCase, GetPaymentsUseCase, SubmitPaymentUseCase, UpdatePaymentStatusUseCase,
};

#[derive(Clone)]
pub struct PaymentUseCases {
    pub submit: Arc<dyn SubmitPaymentUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetPaymentsUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdatePaymentStatusUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePaymentUseCase + Send + Sync>,
}
