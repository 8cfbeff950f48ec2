mod create_admin_review_service;
mod delete_review_service;
mod get_reviews_service;
mod set_review_approval_service;
mod submit_review_service;

pub use create_admin_review_service::CreateAdminReviewService;
pub use delete_review_service::DeleteReviewService;
pub use get_reviews_service::{GetAllReviewsService, GetApprovedReviewsService};
pub use set_review_approval_service::SetReviewApprovalService;
pub use submit_review_service::SubmitReviewService;
