use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::lead::application::ports::incoming::use_cases::{
    LeadSubmission, SubmitLeadCommand,
};
use crate::shared::api::{response::Created, ApiResponse};
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/leads",
    tag = "Leads",
    request_body = LeadSubmission,
    responses(
        (status = 201, description = "Lead stored", body = Created),
        (status = 400, description = "Missing or over-long fields")
    )
)]
#[post("/api/leads")]
pub async fn submit_lead_handler(
    data: web::Data<AppState>,
    payload: web::Json<LeadSubmission>,
) -> impl Responder {
    let command = match SubmitLeadCommand::new(payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_error(&err.to_string()),
    };

    match data.lead.submit.execute(command).await {
        Ok(lead) => ApiResponse::created(Created::new(lead.id, "Lead submitted successfully")),
        Err(e) => {
            error!("Lead submission failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
