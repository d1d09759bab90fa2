use aaliya_backend::config::jwt_conf::JwtConfig;
use aaliya_backend::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use aaliya_backend::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{middleware, Router};
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

fn protected_app() -> (Router, Arc<JwtTokenUtilsImpl>) {
    let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(JwtConfig::default()));
    let state = Arc::new(AdminAuthState {
        jwt_utils: jwt_utils.clone(),
    });
    let app = Router::new()
        .route("/ping", get(|| async { "pong" }))
        .route_layer(middleware::from_fn_with_state(state, admin_auth));
    (app, jwt_utils)
}

#[tokio::test]
async fn request_without_token_is_unauthorized() {
    let (app, _) = protected_app();
    let req = Request::builder()
        .method("GET")
        .uri("/ping")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn request_with_garbage_token_is_unauthorized() {
    let (app, _) = protected_app();
    let req = Request::builder()
        .method("GET")
        .uri("/ping")
        .header("authorization", "Bearer not.a.token")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn request_with_wrong_scheme_is_unauthorized() {
    let (app, jwt_utils) = protected_app();
    let token = jwt_utils
        .generate_token("65f0c1a2b3d4e5f601234567", "admin@example.com")
        .unwrap();
    let req = Request::builder()
        .method("GET")
        .uri("/ping")
        .header("authorization", format!("Basic {token}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn request_with_valid_token_passes_through() {
    let (app, jwt_utils) = protected_app();
    let token = jwt_utils
        .generate_token("65f0c1a2b3d4e5f601234567", "admin@example.com")
        .unwrap();
    let req = Request::builder()
        .method("GET")
        .uri("/ping")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn token_with_non_admin_role_is_unauthorized() {
    use aaliya_backend::util::jwt::Claims;
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    let (app, _) = protected_app();

    // Hand-sign a token with the right secret but the wrong role
    let config = JwtConfig::default();
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "65f0c1a2b3d4e5f601234567".to_string(),
        email: "someone@example.com".to_string(),
        role: "user".to_string(),
        iat: now,
        exp: now + 3600,
        jti: "test-token".to_string(),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_ref()),
    )
    .unwrap();

    let req = Request::builder()
        .method("GET")
        .uri("/ping")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_by_another_secret_is_rejected() {
    let (app, _) = protected_app();

    let mut other_config = JwtConfig::default();
    other_config.jwt_secret = "a_completely_different_secret_key_that_is_long_enough".to_string();
    let other = JwtTokenUtilsImpl::new(other_config);
    let token = other
        .generate_token("65f0c1a2b3d4e5f601234567", "admin@example.com")
        .unwrap();

    let req = Request::builder()
        .method("GET")
        .uri("/ping")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
