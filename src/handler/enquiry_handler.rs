use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::enquiry_dto::{CreateEnquiryRequest, EnquiryListQuery, UpdateEnquiryStatusRequest};
use crate::service::enquiry_service::{EnquiryService, EnquiryServiceImpl};
use crate::util::error::HandlerError;

/// POST /api/public/enquiry
pub async fn create_enquiry_handler(
    State(service): State<Arc<EnquiryServiceImpl>>,
    Json(request): Json<CreateEnquiryRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    request
        .validate()
        .map_err(|e| HandlerError::validation(e.to_string()))?;
    let enquiry = service.submit(request).await?;
    Ok((StatusCode::CREATED, Json(enquiry)))
}

/// GET /api/admin/enquiries?status=&q=
pub async fn list_enquiries_handler(
    State(service): State<Arc<EnquiryServiceImpl>>,
    Query(query): Query<EnquiryListQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let enquiries = service.list(query).await?;
    Ok(Json(enquiries))
}

/// GET /api/admin/enquiries/export?status=&q= — same filters as the list,
/// rendered as a CSV attachment
pub async fn export_enquiries_handler(
    State(service): State<Arc<EnquiryServiceImpl>>,
    Query(query): Query<EnquiryListQuery>,
) -> Result<impl IntoResponse, HandlerError> {
    let csv = service.export_csv(query).await?;
    info!("Serving enquiry CSV export ({} bytes)", csv.len());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"enquiries.csv\"",
            ),
        ],
        csv,
    ))
}

/// PUT /api/admin/enquiries/{id}
pub async fn update_enquiry_handler(
    State(service): State<Arc<EnquiryServiceImpl>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateEnquiryStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let enquiry = service.update(&id, request).await?;
    Ok(Json(enquiry))
}
