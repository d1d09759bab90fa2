use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;
use tracing::{error, info};

use crate::model::gallery::GalleryItem;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

const COLLECTION: &str = "gallery";

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    async fn create(&self, item: GalleryItem) -> RepositoryResult<GalleryItem>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<GalleryItem>;
    /// All items, newest first. Legacy single-media documents come back
    /// as stored; normalization happens in the service layer.
    async fn list(&self) -> RepositoryResult<Vec<GalleryItem>>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
}

pub struct MongoGalleryRepository {
    collection: mongodb::Collection<GalleryItem>,
}

impl MongoGalleryRepository {
    pub fn new(db: &Database) -> Self {
        MongoGalleryRepository {
            collection: db.collection::<GalleryItem>(COLLECTION),
        }
    }
}

#[async_trait]
impl GalleryRepository for MongoGalleryRepository {
    #[tracing::instrument(skip(self, item), fields(destination = %item.destination))]
    async fn create(&self, item: GalleryItem) -> RepositoryResult<GalleryItem> {
        let mut new_item = item;
        new_item.id = Some(ObjectId::new());
        new_item.created_at = Some(super::now_rfc3339());

        match self.collection.insert_one(new_item.clone(), None).await {
            Ok(_) => {
                info!("Gallery item created successfully");
                Ok(new_item)
            }
            Err(e) => {
                error!("Failed to create gallery item: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<GalleryItem> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(item)) => Ok(item),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "Gallery item not found for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to fetch gallery item: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<GalleryItem>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();
        let mut cursor = self.collection.find(None, options).await.map_err(|e| {
            error!("Failed to list gallery items: {}", e);
            RepositoryError::from(e)
        })?;

        let mut items = Vec::new();
        while let Some(result) = cursor.next().await {
            match result {
                Ok(item) => items.push(item),
                Err(e) => {
                    error!("Failed to deserialize gallery item: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize gallery item: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} gallery items", items.len());
        Ok(items)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(result) if result.deleted_count > 0 => {
                info!("Gallery item deleted successfully for ID: {}", id);
                Ok(())
            }
            Ok(_) => Err(RepositoryError::not_found(format!(
                "Gallery item not found for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to delete gallery item: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }
}
