use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, instrument};

use crate::dto::gallery_dto::GalleryItemResponse;
use crate::model::owner_profile::OwnerProfile;
use crate::model::package::Package;
use crate::model::review::Review;
use crate::model::transport::Transport;
use crate::repository::gallery_repo::{GalleryRepository, MongoGalleryRepository};
use crate::repository::owner_profile_repo::{MongoOwnerProfileRepository, OwnerProfileRepository};
use crate::repository::package_repo::{MongoPackageRepository, PackageRepository};
use crate::repository::review_repo::{MongoReviewRepository, ReviewRepository};
use crate::repository::transport_repo::{MongoTransportRepository, TransportRepository};
use crate::util::error::ServiceError;

/// Everything the storefront needs in one payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicData {
    pub packages: Vec<Package>,
    pub transports: Vec<Transport>,
    pub reviews: Vec<Review>,
    pub gallery: Vec<GalleryItemResponse>,
    pub owner_profile: OwnerProfile,
}

/// Unfiltered collections for the admin dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub packages: Vec<Package>,
    pub transports: Vec<Transport>,
    pub reviews: Vec<Review>,
    pub gallery: Vec<GalleryItemResponse>,
    pub owner_profile: OwnerProfile,
}

#[async_trait]
pub trait SiteService: Send + Sync {
    /// Storefront aggregate: active/visible records only, gallery normalized,
    /// profile defaulted when none is stored.
    async fn public_data(&self) -> Result<PublicData, ServiceError>;
    /// Back-office aggregate: every record regardless of visibility flags
    async fn dashboard_data(&self) -> Result<DashboardData, ServiceError>;
}

pub struct SiteServiceImpl {
    pub package_repo: Arc<MongoPackageRepository>,
    pub transport_repo: Arc<MongoTransportRepository>,
    pub review_repo: Arc<MongoReviewRepository>,
    pub gallery_repo: Arc<MongoGalleryRepository>,
    pub profile_repo: Arc<MongoOwnerProfileRepository>,
}

impl SiteServiceImpl {
    pub fn new(
        package_repo: Arc<MongoPackageRepository>,
        transport_repo: Arc<MongoTransportRepository>,
        review_repo: Arc<MongoReviewRepository>,
        gallery_repo: Arc<MongoGalleryRepository>,
        profile_repo: Arc<MongoOwnerProfileRepository>,
    ) -> Self {
        Self {
            package_repo,
            transport_repo,
            review_repo,
            gallery_repo,
            profile_repo,
        }
    }
}

#[async_trait]
impl SiteService for SiteServiceImpl {
    #[instrument(skip(self))]
    async fn public_data(&self) -> Result<PublicData, ServiceError> {
        let packages = self.package_repo.list(true).await?;
        let transports = self.transport_repo.list(true).await?;
        let reviews = self.review_repo.list(true).await?;
        let gallery = self
            .gallery_repo
            .list()
            .await?
            .into_iter()
            .map(GalleryItemResponse::from)
            .collect();
        let owner_profile = self.profile_repo.get().await?.unwrap_or_default();

        info!("Assembled public storefront payload");
        Ok(PublicData {
            packages,
            transports,
            reviews,
            gallery,
            owner_profile,
        })
    }

    #[instrument(skip(self))]
    async fn dashboard_data(&self) -> Result<DashboardData, ServiceError> {
        let packages = self.package_repo.list(false).await?;
        let transports = self.transport_repo.list(false).await?;
        let reviews = self.review_repo.list(false).await?;
        let gallery = self
            .gallery_repo
            .list()
            .await?
            .into_iter()
            .map(GalleryItemResponse::from)
            .collect();
        let owner_profile = self.profile_repo.get().await?.unwrap_or_default();

        Ok(DashboardData {
            packages,
            transports,
            reviews,
            gallery,
            owner_profile,
        })
    }
}
