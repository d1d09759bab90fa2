use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

use crate::service::site_service::{SiteService, SiteServiceImpl};
use crate::util::error::HandlerError;

/// GET /api/public/data — one payload with everything the storefront renders
pub async fn public_data_handler(
    State(service): State<Arc<SiteServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let data = service.public_data().await?;
    Ok(Json(data))
}

/// GET /api/admin/dashboard
pub async fn dashboard_handler(
    State(service): State<Arc<SiteServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let data = service.dashboard_data().await?;
    Ok(Json(data))
}
