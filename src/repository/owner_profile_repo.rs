use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use mongodb::Database;
use tracing::{error, info};

use crate::model::owner_profile::OwnerProfile;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

const COLLECTION: &str = "owner_profile";

/// The owner profile is a singleton document: reads take whatever single
/// document exists, writes follow find-one-or-create semantics.
#[async_trait]
pub trait OwnerProfileRepository: Send + Sync {
    async fn get(&self) -> RepositoryResult<Option<OwnerProfile>>;
    async fn upsert(&self, fields: Document) -> RepositoryResult<OwnerProfile>;
}

pub struct MongoOwnerProfileRepository {
    collection: mongodb::Collection<OwnerProfile>,
}

impl MongoOwnerProfileRepository {
    pub fn new(db: &Database) -> Self {
        MongoOwnerProfileRepository {
            collection: db.collection::<OwnerProfile>(COLLECTION),
        }
    }
}

#[async_trait]
impl OwnerProfileRepository for MongoOwnerProfileRepository {
    #[tracing::instrument(skip(self))]
    async fn get(&self) -> RepositoryResult<Option<OwnerProfile>> {
        self.collection.find_one(None, None).await.map_err(|e| {
            error!("Failed to fetch owner profile: {}", e);
            RepositoryError::from(e)
        })
    }

    #[tracing::instrument(skip(self, fields))]
    async fn upsert(&self, fields: Document) -> RepositoryResult<OwnerProfile> {
        let mut set = fields;
        set.remove("_id");
        set.insert("updatedAt", super::now_rfc3339());

        match self.get().await? {
            Some(existing) => {
                let id = existing.id.ok_or_else(|| {
                    RepositoryError::database("Owner profile document has no id".to_string())
                })?;
                let update = doc! { "$set": set };
                self.collection
                    .update_one(doc! { "_id": id }, update, None)
                    .await
                    .map_err(|e| {
                        error!("Failed to update owner profile: {}", e);
                        RepositoryError::from(e)
                    })?;
                info!("Owner profile updated");
                self.get().await?.ok_or_else(|| {
                    RepositoryError::not_found("Owner profile disappeared after update".to_string())
                })
            }
            None => {
                let mut profile_doc = doc! {
                    "_id": ObjectId::new(),
                    "createdAt": super::now_rfc3339(),
                };
                profile_doc.extend(set);
                let profile: OwnerProfile = bson::from_document(profile_doc)?;
                self.collection
                    .insert_one(profile.clone(), None)
                    .await
                    .map_err(|e| {
                        error!("Failed to create owner profile: {}", e);
                        RepositoryError::from(e)
                    })?;
                info!("Owner profile created");
                Ok(profile)
            }
        }
    }
}
