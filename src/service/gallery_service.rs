use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::gallery_dto::{CreateGalleryRequest, GalleryItemResponse};
use crate::model::gallery::GalleryItem;
use crate::repository::gallery_repo::{GalleryRepository, MongoGalleryRepository};
use crate::util::error::ServiceError;

#[async_trait]
pub trait GalleryService: Send + Sync {
    async fn create(&self, request: CreateGalleryRequest)
        -> Result<GalleryItemResponse, ServiceError>;
    /// All items, legacy single-media records normalized to the media array
    async fn list(&self) -> Result<Vec<GalleryItemResponse>, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}

pub struct GalleryServiceImpl {
    pub gallery_repo: Arc<MongoGalleryRepository>,
}

impl GalleryServiceImpl {
    pub fn new(gallery_repo: Arc<MongoGalleryRepository>) -> Self {
        Self { gallery_repo }
    }
}

#[async_trait]
impl GalleryService for GalleryServiceImpl {
    #[instrument(skip(self, request), fields(destination = %request.destination))]
    async fn create(
        &self,
        request: CreateGalleryRequest,
    ) -> Result<GalleryItemResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        let item = GalleryItem {
            id: None,
            media: Some(request.media),
            media_url: None,
            media_type: None,
            destination: request.destination,
            description: request.description,
            customer_name: request.customer_name,
            created_at: None,
        };

        let created = self.gallery_repo.create(item).await?;
        info!("Gallery item created");
        Ok(GalleryItemResponse::from(created))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<GalleryItemResponse>, ServiceError> {
        let items = self.gallery_repo.list().await?;
        Ok(items.into_iter().map(GalleryItemResponse::from).collect())
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let oid = super::parse_object_id(id)?;
        self.gallery_repo.delete(oid).await?;
        info!("Gallery item deleted");
        Ok(())
    }
}
