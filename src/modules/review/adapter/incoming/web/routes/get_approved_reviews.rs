use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "Reviews",
    responses((status = 200, description = "Approved reviews, newest first"))
)]
#[get("/api/reviews")]
pub async fn get_approved_reviews_handler(data: web::Data<AppState>) -> impl Responder {
    match data.review.get_approved.execute().await {
        Ok(reviews) => ApiResponse::success(reviews),
        Err(e) => {
            error!("Listing approved reviews failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
