use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::payment::application::ports::incoming::use_cases::DeletePaymentError;
use crate::shared::api::{response::Deleted, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    tag = "Payments",
    params(("id" = i64, Path, description = "Payment id")),
    responses(
        (status = 200, description = "Payment and its screenshot deleted", body = Deleted),
        (status = 404, description = "Payment not found")
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/payments/{id}")]
pub async fn delete_payment_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();

    match data.payment.delete.execute(id).await {
        Ok(()) => ApiResponse::success(Deleted::new(id, "Payment deleted")),
        Err(err) => map_delete_error(err),
    }
}

fn map_delete_error(err: DeletePaymentError) -> HttpResponse {
    match err {
        DeletePaymentError::NotFound => {
            ApiResponse::not_found("PAYMENT_NOT_FOUND", "Payment not found")
        }
        DeletePaymentError::RepositoryError(msg) => {
            error!("Payment delete failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
