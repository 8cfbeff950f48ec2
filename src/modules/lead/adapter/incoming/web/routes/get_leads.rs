use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/leads",
    tag = "Leads",
    responses(
        (status = 200, description = "All leads, newest first"),
        (status = 401, description = "No token provided"),
        (status = 403, description = "Invalid or expired token")
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/leads")]
pub async fn get_leads_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.lead.get_list.execute().await {
        Ok(leads) => ApiResponse::success(leads),
        Err(e) => {
            error!("Listing leads failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
