use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::asset::application::ports::incoming::use_cases::GetAssetError;
use crate::shared::api::ApiResponse;
use crate::AppState;

const CACHE_CONTROL: &str = "public, max-age=3600";

#[utoipa::path(
    get,
    path = "/api/assets/{name}",
    tag = "Assets",
    params(("name" = String, Path, description = "Asset name, [a-z0-9_-]{1,100}")),
    responses(
        (status = 200, description = "Raw image bytes with their content type"),
        (status = 404, description = "Asset not found")
    )
)]
#[get("/api/assets/{name}")]
pub async fn get_asset_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.asset.get.execute(&path.into_inner()).await {
        Ok(asset) => HttpResponse::Ok()
            .content_type(asset.mime_type)
            .insert_header((header::CACHE_CONTROL, CACHE_CONTROL))
            .body(asset.data),
        Err(err) => map_get_asset_error(err),
    }
}

fn map_get_asset_error(err: GetAssetError) -> HttpResponse {
    match err {
        GetAssetError::NotFound => ApiResponse::not_found("ASSET_NOT_FOUND", "Asset not found"),
        GetAssetError::LookupFailed(msg) => {
            error!("Asset lookup failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
