use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::handler::enquiry_handler::create_enquiry_handler;
use crate::handler::gallery_handler::list_gallery_handler;
use crate::handler::site_handler::public_data_handler;
use crate::service::enquiry_service::EnquiryServiceImpl;
use crate::service::gallery_service::GalleryServiceImpl;
use crate::service::site_service::SiteServiceImpl;

/// Unauthenticated storefront routes under /api/public
pub fn public_router(
    enquiry_service: Arc<EnquiryServiceImpl>,
    gallery_service: Arc<GalleryServiceImpl>,
    site_service: Arc<SiteServiceImpl>,
) -> Router {
    Router::new()
        .route(
            "/enquiry",
            post(create_enquiry_handler).with_state(enquiry_service),
        )
        .route(
            "/gallery",
            get(list_gallery_handler).with_state(gallery_service),
        )
        .route("/data", get(public_data_handler).with_state(site_service))
}
