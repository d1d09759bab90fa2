use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

use crate::handler::upload_handler::upload_media_handler;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::util::minio::MediaStore;

/// POST /api/upload. Admin-only despite living outside /api/admin; the body
/// limit matches the media store's configured maximum.
pub fn upload_router(media_store: Arc<MediaStore>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    let max_upload = media_store.config.max_upload_bytes;
    Router::new()
        .route(
            "/upload",
            post(upload_media_handler)
                .layer(DefaultBodyLimit::max(max_upload))
                .with_state(media_store),
        )
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth))
}
