use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use tracing::warn;

use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};

pub struct AdminAuthState {
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

/// Bearer-token gate for every back-office route. Validated claims are
/// attached to the request extensions for downstream handlers.
pub async fn admin_auth(
    State(state): State<Arc<AdminAuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = state
        .jwt_utils
        .extract_token_from_header(auth_header)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let claims = state.jwt_utils.validate_token(&token).map_err(|e| {
        warn!("Rejected admin request: {}", e);
        StatusCode::UNAUTHORIZED
    })?;

    if claims.role != "admin" {
        warn!("Rejected admin request: role {}", claims.role);
        return Err(StatusCode::UNAUTHORIZED);
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
