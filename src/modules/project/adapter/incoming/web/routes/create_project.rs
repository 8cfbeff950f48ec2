use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, ProjectSubmission,
};
use crate::shared::api::{response::Created, ApiResponse};
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projects",
    request_body = ProjectSubmission,
    responses(
        (status = 201, description = "Project added", body = Created),
        (status = 400, description = "Missing fields, bad price or bad is_popular literal")
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<ProjectSubmission>,
) -> impl Responder {
    let command = match CreateProjectCommand::new(payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_error(&err.to_string()),
    };

    match data.project.create.execute(command).await {
        Ok(project) => ApiResponse::created(Created::new(project.id, "Project added successfully")),
        Err(e) => {
            error!("Project creation failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
