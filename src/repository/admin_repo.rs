use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;
use tracing::{error, info};

use crate::model::admin::Admin;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

const COLLECTION: &str = "admins";

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create(&self, admin: Admin) -> RepositoryResult<Admin>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Admin>>;
    async fn list(&self) -> RepositoryResult<Vec<Admin>>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
}

pub struct MongoAdminRepository {
    collection: mongodb::Collection<Admin>,
}

impl MongoAdminRepository {
    pub fn new(db: &Database) -> Self {
        MongoAdminRepository {
            collection: db.collection::<Admin>(COLLECTION),
        }
    }
}

#[async_trait]
impl AdminRepository for MongoAdminRepository {
    #[tracing::instrument(skip(self, admin), fields(email = %admin.email))]
    async fn create(&self, admin: Admin) -> RepositoryResult<Admin> {
        let mut new_admin = admin;
        new_admin.id = Some(ObjectId::new());
        let now = super::now_rfc3339();
        new_admin.created_at = Some(now.clone());
        new_admin.updated_at = Some(now);

        match self.collection.insert_one(new_admin.clone(), None).await {
            Ok(_) => {
                info!("Admin created successfully");
                Ok(new_admin)
            }
            Err(e) => {
                error!("Failed to create admin: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(email = %email))]
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Admin>> {
        let filter = doc! { "email": email };
        self.collection.find_one(filter, None).await.map_err(|e| {
            error!("Failed to fetch admin by email: {}", e);
            RepositoryError::from(e)
        })
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Admin>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();
        let mut cursor = self.collection.find(None, options).await.map_err(|e| {
            error!("Failed to list admins: {}", e);
            RepositoryError::from(e)
        })?;

        let mut admins = Vec::new();
        while let Some(result) = cursor.next().await {
            match result {
                Ok(admin) => admins.push(admin),
                Err(e) => {
                    error!("Failed to deserialize admin: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize admin: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} admins", admins.len());
        Ok(admins)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(result) if result.deleted_count > 0 => {
                info!("Admin deleted successfully for ID: {}", id);
                Ok(())
            }
            Ok(_) => Err(RepositoryError::not_found(format!(
                "Admin not found for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to delete admin: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }
}
