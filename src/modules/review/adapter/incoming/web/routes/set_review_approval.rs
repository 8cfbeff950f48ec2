use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::review::application::ports::incoming::use_cases::{
    SetReviewApprovalCommand, SetReviewApprovalError,
};
use crate::shared::api::{coerce::FlexibleBool, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewApprovalRequest {
    /// `true`, `false`, `1`, `0` or their string forms.
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub is_approved: Option<FlexibleBool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewApprovalUpdated {
    pub id: i64,
    pub is_approved: bool,
    pub message: String,
}

#[utoipa::path(
    put,
    path = "/api/reviews/{id}/approve",
    tag = "Reviews",
    params(("id" = i64, Path, description = "Review id")),
    request_body = ReviewApprovalRequest,
    responses(
        (status = 200, description = "Approval flag set", body = ReviewApprovalUpdated),
        (status = 400, description = "Missing or unparseable is_approved"),
        (status = 404, description = "Review not found")
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/reviews/{id}/approve")]
pub async fn set_review_approval_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<ReviewApprovalRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let Some(raw) = payload.into_inner().is_approved else {
        return ApiResponse::validation_error("Missing required fields: is_approved");
    };
    let approved = match raw.parse("is_approved") {
        Ok(flag) => flag,
        Err(err) => return ApiResponse::validation_error(&err.to_string()),
    };

    match data
        .review
        .set_approval
        .execute(SetReviewApprovalCommand { id, approved })
        .await
    {
        Ok(()) => ApiResponse::success(ReviewApprovalUpdated {
            id,
            is_approved: approved,
            message: if approved {
                "Review approved".to_string()
            } else {
                "Review hidden".to_string()
            },
        }),
        Err(err) => map_approval_error(err),
    }
}

fn map_approval_error(err: SetReviewApprovalError) -> HttpResponse {
    match err {
        SetReviewApprovalError::NotFound => {
            ApiResponse::not_found("REVIEW_NOT_FOUND", "Review not found")
        }
        SetReviewApprovalError::RepositoryError(msg) => {
            error!("Review approval failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
