use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Single catalog entry"),
        (status = 404, description = "Project not found")
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    match data.project.get_single.execute(path.into_inner()).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(GetSingleProjectError::QueryFailed(msg)) => {
            error!("Project lookup failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
