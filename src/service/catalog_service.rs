use std::sync::Arc;

use async_trait::async_trait;
use bson::Document;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::package_dto::{ApplyOfferRequest, UpsertPackageRequest};
use crate::dto::profile_dto::UpdateOwnerProfileRequest;
use crate::dto::review_dto::CreateReviewRequest;
use crate::dto::transport_dto::UpsertTransportRequest;
use crate::model::owner_profile::OwnerProfile;
use crate::model::package::Package;
use crate::model::review::Review;
use crate::model::transport::Transport;
use crate::repository::owner_profile_repo::{MongoOwnerProfileRepository, OwnerProfileRepository};
use crate::repository::package_repo::{MongoPackageRepository, PackageRepository};
use crate::repository::review_repo::{MongoReviewRepository, ReviewRepository};
use crate::repository::transport_repo::{MongoTransportRepository, TransportRepository};
use crate::util::error::ServiceError;

/// Outcome of a bulk offer application
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferOutcome {
    pub modified_count: u64,
}

/// Back-office catalog operations: packages, transports, reviews and the
/// owner profile singleton.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn create_package(&self, request: UpsertPackageRequest) -> Result<Package, ServiceError>;
    async fn update_package(
        &self,
        id: &str,
        request: UpsertPackageRequest,
    ) -> Result<Package, ServiceError>;
    async fn delete_package(&self, id: &str) -> Result<(), ServiceError>;
    async fn list_packages(&self, active_only: bool) -> Result<Vec<Package>, ServiceError>;
    async fn apply_offer(&self, request: ApplyOfferRequest) -> Result<OfferOutcome, ServiceError>;

    async fn create_transport(
        &self,
        request: UpsertTransportRequest,
    ) -> Result<Transport, ServiceError>;
    async fn update_transport(
        &self,
        id: &str,
        request: UpsertTransportRequest,
    ) -> Result<Transport, ServiceError>;
    async fn delete_transport(&self, id: &str) -> Result<(), ServiceError>;
    async fn list_transports(&self, active_only: bool) -> Result<Vec<Transport>, ServiceError>;

    async fn create_review(&self, request: CreateReviewRequest) -> Result<Review, ServiceError>;
    async fn delete_review(&self, id: &str) -> Result<(), ServiceError>;
    async fn list_reviews(&self, visible_only: bool) -> Result<Vec<Review>, ServiceError>;

    /// Owner profile upsert; reads go through the aggregate payloads
    async fn update_profile(
        &self,
        request: UpdateOwnerProfileRequest,
    ) -> Result<OwnerProfile, ServiceError>;
}

pub struct CatalogServiceImpl {
    pub package_repo: Arc<MongoPackageRepository>,
    pub transport_repo: Arc<MongoTransportRepository>,
    pub review_repo: Arc<MongoReviewRepository>,
    pub profile_repo: Arc<MongoOwnerProfileRepository>,
}

impl CatalogServiceImpl {
    pub fn new(
        package_repo: Arc<MongoPackageRepository>,
        transport_repo: Arc<MongoTransportRepository>,
        review_repo: Arc<MongoReviewRepository>,
        profile_repo: Arc<MongoOwnerProfileRepository>,
    ) -> Self {
        Self {
            package_repo,
            transport_repo,
            review_repo,
            profile_repo,
        }
    }

    fn package_from_request(request: UpsertPackageRequest) -> Package {
        Package {
            id: None,
            package_type: request.package_type,
            title: request.title,
            destination: request.destination,
            duration: request.duration,
            starting_price: request.starting_price,
            min_people: request.min_people,
            description: request.description,
            itinerary: request.itinerary,
            inclusions: request.inclusions,
            exclusions: request.exclusions,
            images: request.images.unwrap_or_default(),
            offer_text: request.offer_text,
            offer_percent: request.offer_percent.unwrap_or(0.0),
            is_active: request.is_active.unwrap_or(true),
            created_at: None,
            updated_at: None,
        }
    }

    fn update_document<T: serde::Serialize>(request: &T) -> Result<Document, ServiceError> {
        bson::to_document(request)
            .map_err(|e| ServiceError::InternalError(format!("Serialization error: {}", e)))
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create_package(&self, request: UpsertPackageRequest) -> Result<Package, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;
        Ok(self
            .package_repo
            .create(Self::package_from_request(request))
            .await?)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_package(
        &self,
        id: &str,
        request: UpsertPackageRequest,
    ) -> Result<Package, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;
        let oid = super::parse_object_id(id)?;
        let fields = Self::update_document(&request)?;
        Ok(self.package_repo.update(oid, fields).await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_package(&self, id: &str) -> Result<(), ServiceError> {
        let oid = super::parse_object_id(id)?;
        Ok(self.package_repo.delete(oid).await?)
    }

    #[instrument(skip(self))]
    async fn list_packages(&self, active_only: bool) -> Result<Vec<Package>, ServiceError> {
        Ok(self.package_repo.list(active_only).await?)
    }

    #[instrument(skip(self, request), fields(target = %request.target))]
    async fn apply_offer(&self, request: ApplyOfferRequest) -> Result<OfferOutcome, ServiceError> {
        let ids = match request.target.as_str() {
            "ALL" => None,
            "SELECTED" => {
                let raw_ids = request.package_ids.unwrap_or_default();
                if raw_ids.is_empty() {
                    warn!("Offer application rejected: SELECTED with no package ids");
                    return Err(ServiceError::InvalidInput(
                        "Invalid target or no packages selected".to_string(),
                    ));
                }
                let mut ids = Vec::with_capacity(raw_ids.len());
                for raw in &raw_ids {
                    ids.push(super::parse_object_id(raw)?);
                }
                Some(ids)
            }
            other => {
                warn!("Offer application rejected: unknown target {}", other);
                return Err(ServiceError::InvalidInput(
                    "Invalid target or no packages selected".to_string(),
                ));
            }
        };

        let offer_text = request.offer_text.unwrap_or_default();
        let offer_percent = request.offer_percent.unwrap_or(0.0);

        let modified_count = self
            .package_repo
            .apply_offer(ids, &offer_text, offer_percent)
            .await?;
        info!("Offer applied to {} packages", modified_count);
        Ok(OfferOutcome { modified_count })
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_transport(
        &self,
        request: UpsertTransportRequest,
    ) -> Result<Transport, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;
        let transport = Transport {
            id: None,
            name: request.name,
            capacity: request.capacity,
            price_per_km: request.price_per_km.unwrap_or(0.0),
            image: request.image,
            is_active: request.is_active.unwrap_or(true),
            created_at: None,
            updated_at: None,
        };
        Ok(self.transport_repo.create(transport).await?)
    }

    #[instrument(skip(self, request), fields(id = %id))]
    async fn update_transport(
        &self,
        id: &str,
        request: UpsertTransportRequest,
    ) -> Result<Transport, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;
        let oid = super::parse_object_id(id)?;
        let fields = Self::update_document(&request)?;
        Ok(self.transport_repo.update(oid, fields).await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_transport(&self, id: &str) -> Result<(), ServiceError> {
        let oid = super::parse_object_id(id)?;
        Ok(self.transport_repo.delete(oid).await?)
    }

    #[instrument(skip(self))]
    async fn list_transports(&self, active_only: bool) -> Result<Vec<Transport>, ServiceError> {
        Ok(self.transport_repo.list(active_only).await?)
    }

    #[instrument(skip(self, request), fields(customer = %request.customer_name))]
    async fn create_review(&self, request: CreateReviewRequest) -> Result<Review, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;
        let review = Review {
            id: None,
            customer_name: request.customer_name,
            rating: request.rating,
            comment: request.comment,
            customer_photo: request.customer_photo,
            images: request.images.unwrap_or_default(),
            is_visible: request.is_visible.unwrap_or(true),
            created_at: None,
            updated_at: None,
        };
        Ok(self.review_repo.create(review).await?)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_review(&self, id: &str) -> Result<(), ServiceError> {
        let oid = super::parse_object_id(id)?;
        Ok(self.review_repo.delete(oid).await?)
    }

    #[instrument(skip(self))]
    async fn list_reviews(&self, visible_only: bool) -> Result<Vec<Review>, ServiceError> {
        Ok(self.review_repo.list(visible_only).await?)
    }

    #[instrument(skip(self, request))]
    async fn update_profile(
        &self,
        request: UpdateOwnerProfileRequest,
    ) -> Result<OwnerProfile, ServiceError> {
        let mut fields = Document::new();
        if let Some(display_name) = request.display_name {
            fields.insert("displayName", display_name);
        }
        if let Some(owner_image) = request.owner_image {
            fields.insert("ownerImage", owner_image);
        }
        if let Some(contact_phone) = request.contact_phone {
            fields.insert("contactPhone", contact_phone);
        }
        if let Some(instagram_handle) = request.instagram_handle {
            fields.insert("instagramHandle", instagram_handle);
        }
        if let Some(description) = request.description {
            fields.insert("description", description);
        }
        if fields.is_empty() {
            return Err(ServiceError::InvalidInput(
                "Nothing to update: no profile fields provided".to_string(),
            ));
        }
        Ok(self.profile_repo.upsert(fields).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::package::PackageType;

    fn upsert_request() -> UpsertPackageRequest {
        UpsertPackageRequest {
            package_type: PackageType::Couple,
            title: "Honeymoon Special".to_string(),
            destination: "Wayanad".to_string(),
            duration: Some("3D/2N".to_string()),
            starting_price: 18000.0,
            min_people: Some(2),
            description: None,
            itinerary: None,
            inclusions: None,
            exclusions: None,
            images: None,
            offer_text: None,
            offer_percent: None,
            is_active: None,
        }
    }

    #[test]
    fn new_packages_default_to_active_with_no_offer() {
        let package = CatalogServiceImpl::package_from_request(upsert_request());
        assert!(package.is_active);
        assert_eq!(package.offer_percent, 0.0);
        assert!(package.offer_text.is_none());
        assert!(package.images.is_empty());
    }

    #[test]
    fn update_document_omits_missing_fields() {
        let fields = CatalogServiceImpl::update_document(&upsert_request()).unwrap();
        assert_eq!(fields.get_str("title").unwrap(), "Honeymoon Special");
        assert_eq!(fields.get_str("duration").unwrap(), "3D/2N");
        assert!(!fields.contains_key("description"));
        assert!(!fields.contains_key("offerPercent"));
    }
}
