use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::{AdminUserConfig, AppConfig, JwtConfig, MinioConfig, MongoConfig};
use crate::middlewares::admin_middleware::AdminAuthState;
use crate::repository;
use crate::repository::admin_repo::MongoAdminRepository;
use crate::repository::enquiry_repo::MongoEnquiryRepository;
use crate::repository::gallery_repo::MongoGalleryRepository;
use crate::repository::owner_profile_repo::MongoOwnerProfileRepository;
use crate::repository::package_repo::MongoPackageRepository;
use crate::repository::review_repo::MongoReviewRepository;
use crate::repository::transport_repo::MongoTransportRepository;
use crate::router::admin_router::{admin_router, AdminRouterServices};
use crate::router::auth_router::auth_router;
use crate::router::public_router::public_router;
use crate::router::upload_router::upload_router;
use crate::service::auth_service::{AuthService, AuthServiceImpl};
use crate::service::catalog_service::CatalogServiceImpl;
use crate::service::enquiry_service::EnquiryServiceImpl;
use crate::service::gallery_service::GalleryServiceImpl;
use crate::service::site_service::SiteServiceImpl;
use crate::util::jwt::JwtTokenUtilsImpl;
use crate::util::minio::MediaStore;

pub struct App {
    config: AppConfig,
    router: Router,
    pub auth_service: Arc<AuthServiceImpl>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let jwt_config = JwtConfig::from_env().expect("JWT config error");
        let mongo_config = MongoConfig::from_env().expect("Mongo config error");
        let minio_config = MinioConfig::from_env().expect("Media store config error");

        let db = repository::connect(&mongo_config)
            .await
            .expect("Failed to connect to MongoDB");

        let enquiry_repo = Arc::new(MongoEnquiryRepository::new(&db));
        let gallery_repo = Arc::new(MongoGalleryRepository::new(&db));
        let package_repo = Arc::new(MongoPackageRepository::new(&db));
        let transport_repo = Arc::new(MongoTransportRepository::new(&db));
        let review_repo = Arc::new(MongoReviewRepository::new(&db));
        let profile_repo = Arc::new(MongoOwnerProfileRepository::new(&db));
        let admin_repo = Arc::new(MongoAdminRepository::new(&db));

        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(jwt_config));
        let media_store = Arc::new(
            MediaStore::new(minio_config)
                .await
                .expect("Media store error"),
        );

        let enquiry_service = Arc::new(EnquiryServiceImpl::new(
            enquiry_repo,
            package_repo.clone(),
            transport_repo.clone(),
        ));
        let gallery_service = Arc::new(GalleryServiceImpl::new(gallery_repo));
        let catalog_service = Arc::new(CatalogServiceImpl::new(
            package_repo.clone(),
            transport_repo.clone(),
            review_repo.clone(),
            profile_repo.clone(),
        ));
        let site_service = Arc::new(SiteServiceImpl::new(
            package_repo,
            transport_repo,
            review_repo,
            gallery_service.gallery_repo.clone(),
            profile_repo,
        ));
        let auth_service = Arc::new(AuthServiceImpl::new(admin_repo, jwt_utils.clone()));

        let admin_auth_state = Arc::new(AdminAuthState { jwt_utils });

        let router = Router::new()
            .nest(
                "/api/public",
                public_router(
                    enquiry_service.clone(),
                    gallery_service.clone(),
                    site_service.clone(),
                ),
            )
            .nest("/api/auth", auth_router(auth_service.clone()))
            .nest(
                "/api/admin",
                admin_router(
                    AdminRouterServices {
                        enquiry_service,
                        gallery_service,
                        catalog_service,
                        site_service,
                        auth_service: auth_service.clone(),
                    },
                    admin_auth_state.clone(),
                ),
            )
            .nest("/api", upload_router(media_store, admin_auth_state))
            .route("/health", get(|| async { "OK" }));

        let app = App {
            config,
            router,
            auth_service,
        };
        app.create_first_admin_user().await;
        app
    }

    async fn create_first_admin_user(&self) {
        let admin_conf = match AdminUserConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin user config not loaded, skipping bootstrap: {e}");
                return;
            }
        };

        if let Err(e) = self.auth_service.create_first_admin_user(&admin_conf).await {
            error!("Failed to seed bootstrap admin: {e}");
        }
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(
            self.config.host.parse().expect("Invalid host"),
            self.config.port,
        );
        info!("Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router)
            .await
            .expect("Failed to start server");
    }
}
