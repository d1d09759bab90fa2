use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;

use crate::dto::package_dto::{ApplyOfferRequest, UpsertPackageRequest};
use crate::dto::profile_dto::UpdateOwnerProfileRequest;
use crate::dto::review_dto::CreateReviewRequest;
use crate::dto::transport_dto::UpsertTransportRequest;
use crate::service::catalog_service::{CatalogService, CatalogServiceImpl};
use crate::util::error::HandlerError;

/// POST /api/admin/packages
pub async fn create_package_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(request): Json<UpsertPackageRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let package = service.create_package(request).await?;
    Ok((StatusCode::CREATED, Json(package)))
}

/// PUT /api/admin/packages/{id}
pub async fn update_package_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path(id): Path<String>,
    Json(request): Json<UpsertPackageRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let package = service.update_package(&id, request).await?;
    Ok(Json(package))
}

/// DELETE /api/admin/packages/{id}
pub async fn delete_package_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_package(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admin/packages
pub async fn list_packages_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let packages = service.list_packages(false).await?;
    Ok(Json(packages))
}

/// POST /api/admin/packages/offer
pub async fn apply_offer_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(request): Json<ApplyOfferRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let outcome = service.apply_offer(request).await?;
    Ok(Json(outcome))
}

/// POST /api/admin/transports
pub async fn create_transport_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(request): Json<UpsertTransportRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let transport = service.create_transport(request).await?;
    Ok((StatusCode::CREATED, Json(transport)))
}

/// PUT /api/admin/transports/{id}
pub async fn update_transport_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path(id): Path<String>,
    Json(request): Json<UpsertTransportRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let transport = service.update_transport(&id, request).await?;
    Ok(Json(transport))
}

/// DELETE /api/admin/transports/{id}
pub async fn delete_transport_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_transport(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admin/transports
pub async fn list_transports_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let transports = service.list_transports(false).await?;
    Ok(Json(transports))
}

/// POST /api/admin/reviews
pub async fn create_review_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let review = service.create_review(request).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// DELETE /api/admin/reviews/{id}
pub async fn delete_review_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_review(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admin/reviews
pub async fn list_reviews_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let reviews = service.list_reviews(false).await?;
    Ok(Json(reviews))
}

/// PUT /api/admin/profile
pub async fn update_profile_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(request): Json<UpdateOwnerProfileRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let profile = service.update_profile(request).await?;
    Ok(Json(profile))
}
