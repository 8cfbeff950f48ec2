use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::{response::Deleted, ApiResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project deleted", body = Deleted),
        (status = 404, description = "Project not found")
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = path.into_inner();

    match data.project.delete.execute(id).await {
        Ok(()) => ApiResponse::success(Deleted::new(id, "Project deleted")),
        Err(err) => map_delete_error(err),
    }
}

fn map_delete_error(err: DeleteProjectError) -> HttpResponse {
    match err {
        DeleteProjectError::NotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        DeleteProjectError::RepositoryError(msg) => {
            error!("Project delete failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
