use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;
use tracing::{error, info};

use crate::model::transport::Transport;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

const COLLECTION: &str = "transports";

#[async_trait]
pub trait TransportRepository: Send + Sync {
    async fn create(&self, transport: Transport) -> RepositoryResult<Transport>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Transport>;
    async fn update(&self, id: ObjectId, fields: Document) -> RepositoryResult<Transport>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self, active_only: bool) -> RepositoryResult<Vec<Transport>>;
}

pub struct MongoTransportRepository {
    collection: mongodb::Collection<Transport>,
}

impl MongoTransportRepository {
    pub fn new(db: &Database) -> Self {
        MongoTransportRepository {
            collection: db.collection::<Transport>(COLLECTION),
        }
    }
}

#[async_trait]
impl TransportRepository for MongoTransportRepository {
    #[tracing::instrument(skip(self, transport), fields(name = %transport.name))]
    async fn create(&self, transport: Transport) -> RepositoryResult<Transport> {
        let mut new_transport = transport;
        new_transport.id = Some(ObjectId::new());
        let now = super::now_rfc3339();
        new_transport.created_at = Some(now.clone());
        new_transport.updated_at = Some(now);

        match self.collection.insert_one(new_transport.clone(), None).await {
            Ok(_) => {
                info!("Transport created successfully");
                Ok(new_transport)
            }
            Err(e) => {
                error!("Failed to create transport: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Transport> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(transport)) => Ok(transport),
            Ok(None) => Err(RepositoryError::not_found(format!(
                "Transport not found for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to fetch transport: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self, fields), fields(id = %id))]
    async fn update(&self, id: ObjectId, fields: Document) -> RepositoryResult<Transport> {
        let mut set = fields;
        set.remove("_id");
        set.insert("updatedAt", super::now_rfc3339());

        let filter = doc! { "_id": id };
        let update = doc! { "$set": set };
        match self.collection.update_one(filter, update, None).await {
            Ok(result) if result.matched_count > 0 => {
                info!("Transport updated successfully for ID: {}", id);
                self.get_by_id(id).await
            }
            Ok(_) => Err(RepositoryError::not_found(format!(
                "No transport found to update for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to update transport: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        let filter = doc! { "_id": id };
        match self.collection.delete_one(filter, None).await {
            Ok(result) if result.deleted_count > 0 => {
                info!("Transport deleted successfully for ID: {}", id);
                Ok(())
            }
            Ok(_) => Err(RepositoryError::not_found(format!(
                "Transport not found for ID: {}",
                id
            ))),
            Err(e) => {
                error!("Failed to delete transport: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, active_only: bool) -> RepositoryResult<Vec<Transport>> {
        let filter = active_only.then(|| doc! { "isActive": true });
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();
        let mut cursor = self.collection.find(filter, options).await.map_err(|e| {
            error!("Failed to list transports: {}", e);
            RepositoryError::from(e)
        })?;

        let mut transports = Vec::new();
        while let Some(result) = cursor.next().await {
            match result {
                Ok(transport) => transports.push(transport),
                Err(e) => {
                    error!("Failed to deserialize transport: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize transport: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} transports", transports.len());
        Ok(transports)
    }
}
