mod delete_payment_service;
mod get_payments_service;
mod submit_payment_service;
mod update_payment_status_service;

pub use delete_payment_service::DeletePaymentService;
pub use get_payments_service::GetPaymentsService;
pub use submit_payment_service::SubmitPaymentService;
pub use update_payment_status_service::UpdatePaymentStatusService;
