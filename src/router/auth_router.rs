use axum::routing::post;
use axum::Router;
use std::sync::Arc;

use crate::handler::auth_handler::login_handler;
use crate::service::auth_service::AuthServiceImpl;

/// Unauthenticated login route under /api/auth
pub fn auth_router(auth_service: Arc<AuthServiceImpl>) -> Router {
    Router::new().route("/login", post(login_handler).with_state(auth_service))
}
