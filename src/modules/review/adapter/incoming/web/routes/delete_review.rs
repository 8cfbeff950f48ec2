use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::review::application::ports::incoming::use_cases::DeleteReviewError;
use crate::shared::api::{response::Deleted, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = "Reviews",
    params(("id" = i64, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted", body = Deleted),
        (status = 404, description = "Review not found")
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/reviews/{id}")]
pub async fn delete_review_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();

    match data.review.delete.execute(id).await {
        Ok(()) => ApiResponse::success(Deleted::new(id, "Review deleted")),
        Err(err) => map_delete_error(err),
    }
}

fn map_delete_error(err: DeleteReviewError) -> HttpResponse {
    match err {
        DeleteReviewError::NotFound => ApiResponse::not_found("REVIEW_NOT_FOUND", "Review not found"),
        DeleteReviewError::RepositoryError(msg) => {
            error!("Review delete failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
