use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

use crate::dto::gallery_dto::CreateGalleryRequest;
use crate::service::gallery_service::{GalleryService, GalleryServiceImpl};
use crate::util::error::HandlerError;

/// POST /api/admin/gallery
pub async fn create_gallery_item_handler(
    State(service): State<Arc<GalleryServiceImpl>>,
    Json(request): Json<CreateGalleryRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let item = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/public/gallery and GET /api/admin/gallery
pub async fn list_gallery_handler(
    State(service): State<Arc<GalleryServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let items = service.list().await?;
    Ok(Json(items))
}

/// DELETE /api/admin/gallery/{id}
pub async fn delete_gallery_item_handler(
    State(service): State<Arc<GalleryServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
