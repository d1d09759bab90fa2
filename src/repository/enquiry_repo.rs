use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use mongodb::Database;
use tracing::{error, info};

use crate::model::enquiry::{Enquiry, EnquiryStatus};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

const COLLECTION: &str = "enquiries";

#[async_trait]
pub trait EnquiryRepository: Send + Sync {
    async fn create(&self, enquiry: Enquiry) -> RepositoryResult<Enquiry>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Enquiry>;
    /// All enquiries, newest first
    async fn list(&self) -> RepositoryResult<Vec<Enquiry>>;
    /// Partial triage update: only provided fields are written
    async fn update_status(
        &self,
        id: ObjectId,
        status: Option<EnquiryStatus>,
        notes: Option<String>,
    ) -> RepositoryResult<Enquiry>;
}

pub struct MongoEnquiryRepository {
    collection: mongodb::Collection<Enquiry>,
}

impl MongoEnquiryRepository {
    pub fn new(db: &Database) -> Self {
        MongoEnquiryRepository {
            collection: db.collection::<Enquiry>(COLLECTION),
        }
    }
}

#[async_trait]
impl EnquiryRepository for MongoEnquiryRepository {
    #[tracing::instrument(skip(self, enquiry), fields(customer = %enquiry.customer_name))]
    async fn create(&self, enquiry: Enquiry) -> RepositoryResult<Enquiry> {
        let mut new_enquiry = enquiry;
        new_enquiry.id = Some(ObjectId::new());
        new_enquiry.status = EnquiryStatus::Pending;
        let now = super::now_rfc3339();
        new_enquiry.created_at = Some(now.clone());
        new_enquiry.updated_at = Some(now);

        match self.collection.insert_one(new_enquiry.clone(), None).await {
            Ok(_) => {
                info!("Enquiry created successfully");
                Ok(new_enquiry)
            }
            Err(e) => {
                error!("Failed to create enquiry: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Enquiry> {
        let filter = doc! { "_id": id };
        match self.collection.find_one(filter, None).await {
            Ok(Some(enquiry)) => Ok(enquiry),
            Ok(None) => {
                error!("Enquiry not found for ID: {}", id);
                Err(RepositoryError::not_found(format!(
                    "Enquiry not found for ID: {}",
                    id
                )))
            }
            Err(e) => {
                error!("Failed to fetch enquiry by ID: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> RepositoryResult<Vec<Enquiry>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();
        let mut cursor = self.collection.find(None, options).await.map_err(|e| {
            error!("Failed to list enquiries: {}", e);
            RepositoryError::from(e)
        })?;

        let mut enquiries = Vec::new();
        while let Some(result) = cursor.next().await {
            match result {
                Ok(enquiry) => enquiries.push(enquiry),
                Err(e) => {
                    error!("Failed to deserialize enquiry: {}", e);
                    return Err(RepositoryError::serialization(format!(
                        "Failed to deserialize enquiry: {}",
                        e
                    )));
                }
            }
        }
        info!("Fetched {} enquiries", enquiries.len());
        Ok(enquiries)
    }

    #[tracing::instrument(skip(self), fields(id = %id, status = ?status))]
    async fn update_status(
        &self,
        id: ObjectId,
        status: Option<EnquiryStatus>,
        notes: Option<String>,
    ) -> RepositoryResult<Enquiry> {
        let mut set = Document::new();
        if let Some(status) = status {
            set.insert("status", status.as_str());
        }
        if let Some(notes) = notes {
            set.insert("notes", notes);
        }
        set.insert("updatedAt", super::now_rfc3339());

        let filter = doc! { "_id": id };
        let update = doc! { "$set": set };
        match self.collection.update_one(filter, update, None).await {
            Ok(result) if result.matched_count > 0 => {
                info!("Enquiry updated successfully for ID: {}", id);
                self.get_by_id(id).await
            }
            Ok(_) => {
                error!("No enquiry found to update for ID: {}", id);
                Err(RepositoryError::not_found(format!(
                    "No enquiry found to update for ID: {}",
                    id
                )))
            }
            Err(e) => {
                error!("Failed to update enquiry: {}", e);
                Err(RepositoryError::from(e))
            }
        }
    }
}
