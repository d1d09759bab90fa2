use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;
use tracing::{error, info};

use crate::model::package::Package;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

const COLLECTION: &str = "packages";

/// Build the bulk update applied by an offer request.
///
/// A positive percent sets both fields as given (text may be empty for a
/// percent-only offer). Anything else clears the pair: offerText is unset
/// and offerPercent forced back to 0, so no document is left half-cleared.
pub fn offer_update_document(offer_text: &str, offer_percent: f64) -> Document {
    if offer_percent > 0.0 {
        doc! { "$set": { "offerText": offer_text, "offerPercent": offer_percent } }
    } else {
        doc! {
            "$unset": { "offerText": "" },
            "$set": { "offerPercent": 0.0 },
        }
    }
}

#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn create(&self, package: Package) -> RepositoryResult<Package>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Package>;
    /// $set the provided fields on an existing document
    async fn update(&self, id: ObjectId, fields: Document) -> RepositoryResult<Package>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    /// All packages, newest first; active_only restricts to isActive
    async fn list(&self, active_only: bool) -> RepositoryResult<Vec<Package>>;
    /// Bulk offer application: ids = None targets every package. Best-effort
    /// across documents, no cross-document transaction.
    async fn apply_offer(
        &self,
        ids: Option<Vec<ObjectId>>,
        offer_text: &str,
        offer_percent: f64,
    ) -> RepositoryResult<u64>;
}

pub struct MongoPackageRepository {
    collection: mongodb::Collection<Package>,
}

impl MongoPackageRepository {
    pub fn new(db: &Database) -> Self {
        MongoPackageRepository {
            collection: db.collection::<Package>(COLLECTION),
        }
    }
}

#[async_trait]
impl PackageRepository for MongoPackageRepository {
    #[tracing::instrument(skip(self, package), fields(title = %package.title))]
    async fn create(&self, package: Package) -> RepositoryResult<Package> {
        let mut new_package = package;
        new_package.id = Some(ObjectId::new());
        let now = super::now_rfc3339();
        new_package.created_at = Some(now.clone());
        new_package.updated_at = Some(now);

        match self.collection.insert_one(new_package.clone(), None).await {
            Ok(_) => {
                info!("Package created successfully");
                Ok(new_package)
            }
            Err(e) => {
                error!("Failed to create package: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Package> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(package)) => Ok(package),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "Package not found for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to fetch package: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self, fields), fields(id = %id))]
    async fn update(&self, id: ObjectId, fields: Document) -> RepositoryResult<Package> {
        let mut set = fields;
        set.remove("_id");
        set.insert("updatedAt", super::now_rfc3339());

        let filter = doc! { "_id": id };
        let update = doc! { "$set": set };
        match self.collection.update_one(filter, update, None).await {
            Ok(result) if result.matched_count > 0 => {
                info!("Package updated successfully for ID: {}", id);
                self.get_by_id(id).await
            }
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No package found to update for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to update package: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(result) if result.deleted_count > 0 => {
                info!("Package deleted successfully for ID: {}", id);
                Ok(())
            }
            Ok(_) => Err(RepositoryError::not_found(format!(
                "Package not found for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to delete package: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, active_only: bool) -> RepositoryResult<Vec<Package>> {
        let filter = active_only.then(|| doc! { "isActive": true });
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();
        let mut cursor = self.collection.find(filter, options).await.map_err(|e| {
            error!("Failed to list packages: {}", e);
            RepositoryError::from(e)
        })?;

        let mut packages = Vec::new();
        while let Some(result) = cursor.next().await {
            match result {
                Ok(package) => packages.push(package),
                Err(e) => {
                    error!("Failed to deserialize package: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize package: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} packages", packages.len());
        Ok(packages)
    }

    #[tracing::instrument(skip(self, ids), fields(offer_percent = offer_percent))]
    async fn apply_offer(
        &self,
        ids: Option<Vec<ObjectId>>,
        offer_text: &str,
        offer_percent: f64,
    ) -> RepositoryResult<u64> {
        let filter = match ids {
            Some(ids) => doc! { "_id": { "$in": ids } },
            None => doc! {},
        };
        let update = offer_update_document(offer_text, offer_percent);

        match self.collection.update_many(filter, update, None).await {
            Ok(result) => {
                info!("Offer applied to {} packages", result.modified_count);
                Ok(result.modified_count)
            }
            Err(e) => {
                error!("Failed to apply offer: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_percent_sets_both_fields() {
        let update = offer_update_document("Summer sale", 15.0);
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("offerText").unwrap(), "Summer sale");
        assert_eq!(set.get_f64("offerPercent").unwrap(), 15.0);
        assert!(update.get_document("$unset").is_err());
    }

    #[test]
    fn percent_only_offer_keeps_empty_text() {
        let update = offer_update_document("", 20.0);
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("offerText").unwrap(), "");
        assert_eq!(set.get_f64("offerPercent").unwrap(), 20.0);
    }

    #[test]
    fn zero_percent_clears_the_pair_atomically() {
        let update = offer_update_document("leftover text", 0.0);
        let unset = update.get_document("$unset").unwrap();
        assert!(unset.contains_key("offerText"));
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_f64("offerPercent").unwrap(), 0.0);
        assert!(!set.contains_key("offerText"));
    }

    #[test]
    fn negative_percent_is_treated_as_removal() {
        let update = offer_update_document("x", -5.0);
        assert!(update.get_document("$unset").is_ok());
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_f64("offerPercent").unwrap(), 0.0);
    }
}
