use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::review::application::ports::incoming::use_cases::{
    ReviewSubmission, SubmitReviewCommand,
};
use crate::shared::api::{response::Created, ApiResponse};
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/reviews/admin",
    tag = "Reviews",
    request_body = ReviewSubmission,
    responses(
        (status = 201, description = "Review stored already approved", body = Created),
        (status = 400, description = "Missing fields or rating outside 1-5")
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/reviews/admin")]
pub async fn create_admin_review_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<ReviewSubmission>,
) -> impl Responder {
    let command = match SubmitReviewCommand::new(payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_error(&err.to_string()),
    };

    match data.review.create_admin.execute(command).await {
        Ok(review) => {
            tracing::info!("Review {} added by {}", review.id, admin.username());
            ApiResponse::created(Created::new(review.id, "Review added successfully"))
        }
        Err(e) => {
            error!("Admin review creation failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
