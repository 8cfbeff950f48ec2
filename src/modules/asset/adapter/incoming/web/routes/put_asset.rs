use actix_multipart::Multipart;
use actix_web::{put, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::asset::application::{
    domain::image_policy::{ImageUpload, MAX_IMAGE_BYTES},
    ports::incoming::use_cases::{PutAssetCommand, PutAssetError},
};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::{multipart::read_multipart, ApiResponse};
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct AssetStored {
    pub name: String,
    pub mime_type: String,
    pub size: usize,
    pub message: String,
}

#[utoipa::path(
    put,
    path = "/api/assets/{name}",
    tag = "Assets",
    params(("name" = String, Path, description = "Asset name, [a-z0-9_-]{1,100}")),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 200, description = "Asset stored or replaced", body = AssetStored),
        (status = 400, description = "Bad or reserved name, missing file or rejected image")
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/assets/{name}")]
pub async fn put_asset_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<String>,
    mut payload: Multipart,
) -> impl Responder {
    let raw_name = path.into_inner();

    let form = match read_multipart(&mut payload, "file", MAX_IMAGE_BYTES).await {
        Ok(form) => form,
        Err(err) => return err.to_response(),
    };

    let Some(file) = form.file else {
        return ApiResponse::validation_error("Missing required fields: file");
    };

    let image = match ImageUpload::check(&file.content_type, file.filename.as_deref(), file.bytes)
    {
        Ok(image) => image,
        Err(rejection) => {
            return ApiResponse::bad_request("INVALID_ATTACHMENT", &rejection.to_string())
        }
    };

    let command = match PutAssetCommand::new(&raw_name, image) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_error(&err.to_string()),
    };

    let stored = AssetStored {
        name: command.name().to_string(),
        mime_type: command.image().mime_type().to_string(),
        size: command.image().len(),
        message: "Asset stored".to_string(),
    };

    match data.asset.put.execute(command).await {
        Ok(()) => ApiResponse::success(stored),
        Err(err) => map_put_asset_error(err),
    }
}

fn map_put_asset_error(err: PutAssetError) -> HttpResponse {
    match err {
        PutAssetError::RepositoryError(msg) => {
            error!("Storing asset failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
