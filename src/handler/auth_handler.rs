use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

use crate::dto::auth_dto::{CreateAdminRequest, LoginRequest};
use crate::service::auth_service::{AuthService, AuthServiceImpl};
use crate::util::error::HandlerError;

/// POST /api/auth/login
pub async fn login_handler(
    State(service): State<Arc<AuthServiceImpl>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// POST /api/admin/create-admin
pub async fn create_admin_handler(
    State(service): State<Arc<AuthServiceImpl>>,
    Json(request): Json<CreateAdminRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let admin = service.create_admin(request).await?;
    Ok((StatusCode::CREATED, Json(admin)))
}

/// GET /api/admin/admins
pub async fn list_admins_handler(
    State(service): State<Arc<AuthServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let admins = service.list_admins().await?;
    Ok(Json(admins))
}

/// DELETE /api/admin/admins/{id}
pub async fn delete_admin_handler(
    State(service): State<Arc<AuthServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_admin(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
