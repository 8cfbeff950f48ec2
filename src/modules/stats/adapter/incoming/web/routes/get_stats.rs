use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::stats::application::domain::entities::DashboardStats;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardStats),
        (status = 401, description = "No token provided"),
        (status = 403, description = "Invalid or expired token")
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/stats")]
pub async fn get_stats_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.stats.get.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => {
            error!("Fetching stats failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
