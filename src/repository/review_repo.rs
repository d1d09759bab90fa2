use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;
use tracing::{error, info};

use crate::model::review::Review;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

const COLLECTION: &str = "reviews";

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: Review) -> RepositoryResult<Review>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self, visible_only: bool) -> RepositoryResult<Vec<Review>>;
}

pub struct MongoReviewRepository {
    collection: mongodb::Collection<Review>,
}

impl MongoReviewRepository {
    pub fn new(db: &Database) -> Self {
        MongoReviewRepository {
            collection: db.collection::<Review>(COLLECTION),
        }
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    #[tracing::instrument(skip(self, review), fields(customer = %review.customer_name))]
    async fn create(&self, review: Review) -> RepositoryResult<Review> {
        let mut new_review = review;
        new_review.id = Some(ObjectId::new());
        let now = super::now_rfc3339();
        new_review.created_at = Some(now.clone());
        new_review.updated_at = Some(now);

        match self.collection.insert_one(new_review.clone(), None).await {
            Ok(_) => {
                info!("Review created successfully");
                Ok(new_review)
            }
            Err(e) => {
                error!("Failed to create review: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(result) if result.deleted_count > 0 => {
                info!("Review deleted successfully for ID: {}", id);
                Ok(())
            }
            Ok(_) => Err(RepositoryError::not_found(format!(
                "Review not found for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to delete review: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, visible_only: bool) -> RepositoryResult<Vec<Review>> {
        let filter = visible_only.then(|| doc! { "isVisible": true });
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();
        let mut cursor = self.collection.find(filter, options).await.map_err(|e| {
            error!("Failed to list reviews: {}", e);
            RepositoryError::from(e)
        })?;

        let mut reviews = Vec::new();
        while let Some(result) = cursor.next().await {
            match result {
                Ok(review) => reviews.push(review),
                Err(e) => {
                    error!("Failed to deserialize review: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize review: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} reviews", reviews.len());
        Ok(reviews)
    }
}
