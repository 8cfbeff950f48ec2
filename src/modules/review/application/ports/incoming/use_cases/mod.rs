mod create_admin_review;
mod delete_review;
mod get_reviews;
mod set_review_approval;
mod submit_review;

pub use create_admin_review::*;
pub use delete_review::*;
pub use get_reviews::*;
pub use set_review_approval::*;
pub use submit_review::*;
