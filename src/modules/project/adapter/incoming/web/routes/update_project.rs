use actix_web::{put, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::{
    ProjectUpdate, UpdateProjectCommand, UpdateProjectError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(("id" = i64, Path, description = "Project id")),
    request_body = ProjectUpdate,
    responses(
        (status = 200, description = "Project as stored after the update"),
        (status = 400, description = "Invalid field value"),
        (status = 404, description = "Project not found")
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<ProjectUpdate>,
) -> impl Responder {
    let command = match UpdateProjectCommand::new(path.into_inner(), payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_error(&err.to_string()),
    };

    match data.project.update.execute(command).await {
        Ok(project) => ApiResponse::success(project),
        Err(err) => map_update_error(err),
    }
}

fn map_update_error(err: UpdateProjectError) -> HttpResponse {
    match err {
        UpdateProjectError::NotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        UpdateProjectError::RepositoryError(msg) => {
            error!("Project update failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
