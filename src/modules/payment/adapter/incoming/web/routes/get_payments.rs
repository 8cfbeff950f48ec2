use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "Payments",
    responses(
        (status = 200, description = "All payments, newest first"),
        (status = 401, description = "No token provided")
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/payments")]
pub async fn get_payments_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.payment.get_list.execute().await {
        Ok(payments) => ApiResponse::success(payments),
        Err(e) => {
            error!("Listing payments failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
