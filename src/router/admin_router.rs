use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::sync::Arc;

use crate::handler::auth_handler::{
    create_admin_handler, delete_admin_handler, list_admins_handler,
};
use crate::handler::catalog_handler::{
    apply_offer_handler, create_package_handler, create_review_handler, create_transport_handler,
    delete_package_handler, delete_review_handler, delete_transport_handler,
    list_packages_handler, list_reviews_handler, list_transports_handler, update_package_handler,
    update_profile_handler, update_transport_handler,
};
use crate::handler::enquiry_handler::{
    export_enquiries_handler, list_enquiries_handler, update_enquiry_handler,
};
use crate::handler::gallery_handler::{
    create_gallery_item_handler, delete_gallery_item_handler, list_gallery_handler,
};
use crate::handler::site_handler::dashboard_handler;
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::service::auth_service::AuthServiceImpl;
use crate::service::catalog_service::CatalogServiceImpl;
use crate::service::enquiry_service::EnquiryServiceImpl;
use crate::service::gallery_service::GalleryServiceImpl;
use crate::service::site_service::SiteServiceImpl;

pub struct AdminRouterServices {
    pub enquiry_service: Arc<EnquiryServiceImpl>,
    pub gallery_service: Arc<GalleryServiceImpl>,
    pub catalog_service: Arc<CatalogServiceImpl>,
    pub site_service: Arc<SiteServiceImpl>,
    pub auth_service: Arc<AuthServiceImpl>,
}

/// Bearer-token protected back-office routes under /api/admin
pub fn admin_router(
    services: AdminRouterServices,
    admin_auth_state: Arc<AdminAuthState>,
) -> Router {
    let AdminRouterServices {
        enquiry_service,
        gallery_service,
        catalog_service,
        site_service,
        auth_service,
    } = services;

    Router::new()
        .route(
            "/enquiries",
            get(list_enquiries_handler).with_state(enquiry_service.clone()),
        )
        .route(
            "/enquiries/export",
            get(export_enquiries_handler).with_state(enquiry_service.clone()),
        )
        .route(
            "/enquiries/{id}",
            put(update_enquiry_handler).with_state(enquiry_service),
        )
        .route(
            "/packages",
            get(list_packages_handler)
                .post(create_package_handler)
                .with_state(catalog_service.clone()),
        )
        .route(
            "/packages/offer",
            post(apply_offer_handler).with_state(catalog_service.clone()),
        )
        .route(
            "/packages/{id}",
            put(update_package_handler)
                .delete(delete_package_handler)
                .with_state(catalog_service.clone()),
        )
        .route(
            "/transports",
            get(list_transports_handler)
                .post(create_transport_handler)
                .with_state(catalog_service.clone()),
        )
        .route(
            "/transports/{id}",
            put(update_transport_handler)
                .delete(delete_transport_handler)
                .with_state(catalog_service.clone()),
        )
        .route(
            "/reviews",
            get(list_reviews_handler)
                .post(create_review_handler)
                .with_state(catalog_service.clone()),
        )
        .route(
            "/reviews/{id}",
            delete(delete_review_handler).with_state(catalog_service.clone()),
        )
        .route(
            "/profile",
            put(update_profile_handler).with_state(catalog_service),
        )
        .route(
            "/gallery",
            get(list_gallery_handler)
                .post(create_gallery_item_handler)
                .with_state(gallery_service.clone()),
        )
        .route(
            "/gallery/{id}",
            delete(delete_gallery_item_handler).with_state(gallery_service),
        )
        .route(
            "/dashboard-data",
            get(dashboard_handler).with_state(site_service),
        )
        .route(
            "/create-admin",
            post(create_admin_handler).with_state(auth_service.clone()),
        )
        .route(
            "/admins",
            get(list_admins_handler).with_state(auth_service.clone()),
        )
        .route(
            "/admins/{id}",
            delete(delete_admin_handler).with_state(auth_service),
        )
        .route_layer(middleware::from_fn_with_state(admin_auth_state, admin_auth))
}
