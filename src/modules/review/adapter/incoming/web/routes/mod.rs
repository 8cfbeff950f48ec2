mod create_admin_review;
mod delete_review;
mod get_all_reviews;
mod get_approved_reviews;
mod set_review_approval;
mod submit_review;

pub use create_admin_review::*;
pub use delete_review::*;
pub use get_all_reviews::*;
pub use get_approved_reviews::*;
pub use set_review_approval::*;
pub use submit_review::*;
