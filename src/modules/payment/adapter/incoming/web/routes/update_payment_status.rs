use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::payment::application::ports::incoming::use_cases::{
    UpdatePaymentStatusCommand, UpdatePaymentStatusError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePaymentStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentStatusUpdated {
    pub id: i64,
    pub status: String,
    pub message: String,
}

#[utoipa::path(
    put,
    path = "/api/payments/{id}/status",
    tag = "Payments",
    params(("id" = i64, Path, description = "Payment id")),
    request_body = UpdatePaymentStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = PaymentStatusUpdated),
        (status = 400, description = "Status outside pending/verified/rejected"),
        (status = 404, description = "Payment not found")
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/payments/{id}/status")]
pub async fn update_payment_status_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<UpdatePaymentStatusRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let Some(raw_status) = payload.into_inner().status else {
        return ApiResponse::validation_error("Missing required fields: status");
    };

    let command = match UpdatePaymentStatusCommand::new(id, &raw_status) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::bad_request("INVALID_STATUS", &err.to_string()),
    };

    match data.payment.update_status.execute(command).await {
        Ok(()) => ApiResponse::success(PaymentStatusUpdated {
            id,
            status: command.status().to_string(),
            message: "Payment status updated".to_string(),
        }),
        Err(err) => map_update_error(err),
    }
}

fn map_update_error(err: UpdatePaymentStatusError) -> HttpResponse {
    match err {
        UpdatePaymentStatusError::NotFound => {
            ApiResponse::not_found("PAYMENT_NOT_FOUND", "Payment not found")
        }
        UpdatePaymentStatusError::RepositoryError(msg) => {
            error!("Payment status update failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
