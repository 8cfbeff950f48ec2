use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::lead::application::ports::incoming::use_cases::DeleteLeadError;
use crate::shared::api::{response::Deleted, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/leads/{id}",
    tag = "Leads",
    params(("id" = i64, Path, description = "Lead id")),
    responses(
        (status = 200, description = "Lead deleted", body = Deleted),
        (status = 404, description = "Lead not found")
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/leads/{id}")]
pub async fn delete_lead_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();

    match data.lead.delete.execute(id).await {
        Ok(()) => ApiResponse::success(Deleted::new(id, "Lead deleted")),
        Err(err) => map_delete_error(err),
    }
}

fn map_delete_error(err: DeleteLeadError) -> HttpResponse {
    match err {
        DeleteLeadError::NotFound => ApiResponse::not_found("LEAD_NOT_FOUND", "Lead not found"),
        DeleteLeadError::RepositoryError(msg) => {
            error!("Lead delete failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
