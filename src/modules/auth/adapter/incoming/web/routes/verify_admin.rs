use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyAdminResponse {
    pub username: String,
    pub role: String,
}

#[utoipa::path(
    get,
    path = "/api/admin/verify",
    tag = "Auth",
    responses(
        (status = 200, description = "Token is valid", body = VerifyAdminResponse),
        (status = 401, description = "No token provided"),
        (status = 403, description = "Invalid or expired token")
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/verify")]
pub async fn verify_admin_handler(admin: AdminUser) -> impl Responder {
    let AdminUser(identity) = admin;

    ApiResponse::success(VerifyAdminResponse {
        username: identity.username,
        role: identity.role.to_string(),
    })
}
