use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::lead::application::ports::incoming::use_cases::{
    UpdateLeadStatusCommand, UpdateLeadStatusError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLeadStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeadStatusUpdated {
    pub id: i64,
    pub status: String,
    pub message: String,
}

#[utoipa::path(
    put,
    path = "/api/leads/{id}/status",
    tag = "Leads",
    params(("id" = i64, Path, description = "Lead id")),
    request_body = UpdateLeadStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = LeadStatusUpdated),
        (status = 400, description = "Status outside new/contacted/in_progress/completed"),
        (status = 404, description = "Lead not found")
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/leads/{id}/status")]
pub async fn update_lead_status_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateLeadStatusRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let Some(raw_status) = payload.into_inner().status else {
        return ApiResponse::validation_error("Missing required fields: status");
    };

    let command = match UpdateLeadStatusCommand::new(id, &raw_status) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::bad_request("INVALID_STATUS", &err.to_string()),
    };

    match data.lead.update_status.execute(command).await {
        Ok(()) => ApiResponse::success(LeadStatusUpdated {
            id,
            status: command.status().to_string(),
            message: "Lead status updated".to_string(),
        }),
        Err(err) => map_update_error(err),
    }
}

fn map_update_error(err: UpdateLeadStatusError) -> HttpResponse {
    match err {
        UpdateLeadStatusError::NotFound => ApiResponse::not_found("LEAD_NOT_FOUND", "Lead not found"),
        UpdateLeadStatusError::RepositoryError(msg) => {
            error!("Lead status update failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
