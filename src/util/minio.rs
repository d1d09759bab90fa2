use minio::s3::args::{BucketExistsArgs, MakeBucketArgs, PutObjectArgs, RemoveObjectArgs};
use minio::s3::client::{Client, ClientBuilder};
use minio::s3::creds::StaticProvider;
use minio::s3::http::BaseUrl;
use std::io::Cursor;
use tracing::{debug, error, info, instrument, warn};

use crate::config::MinioConfig;

/// S3-backed media store. Uploads are synchronous request/response round
/// trips; a failed upload surfaces an error and the caller re-submits.
#[derive(Debug, Clone)]
pub struct MediaStore {
    client: Client,
    pub config: MinioConfig,
}

impl MediaStore {
    #[instrument(skip(config), fields(endpoint = %config.endpoint, bucket = %config.bucket_name))]
    pub async fn new(config: MinioConfig) -> Result<Self, MediaStoreError> {
        info!("Initializing media store");

        config.validate().map_err(|e| {
            error!("Media store configuration validation failed: {}", e);
            MediaStoreError::ConfigError(e.to_string())
        })?;

        let base_url = config.get_endpoint_url().parse::<BaseUrl>().map_err(|e| {
            error!("Failed to parse media store endpoint URL: {}", e);
            MediaStoreError::ConnectionError(format!("Invalid endpoint URL: {}", e))
        })?;

        let static_provider = StaticProvider::new(&config.access_key, &config.secret_key, None);

        let client = ClientBuilder::new(base_url)
            .provider(Some(Box::new(static_provider)))
            .build()
            .map_err(|e| {
                error!("Failed to create media store client: {}", e);
                MediaStoreError::ConnectionError(format!("Client creation failed: {}", e))
            })?;

        let store = Self { client, config };
        store.ensure_bucket_exists().await?;

        info!("Media store initialized successfully");
        Ok(store)
    }

    /// Ensure the configured bucket exists, create it if it doesn't
    #[instrument(skip(self))]
    async fn ensure_bucket_exists(&self) -> Result<(), MediaStoreError> {
        let bucket_exists_args = BucketExistsArgs::new(&self.config.bucket_name)
            .map_err(|e| MediaStoreError::InvalidArguments(e.to_string()))?;

        let exists = self
            .client
            .bucket_exists(&bucket_exists_args)
            .await
            .map_err(|e| {
                error!("Failed to check if bucket exists: {}", e);
                MediaStoreError::OperationError(format!("Bucket exists check failed: {}", e))
            })?;

        if exists {
            debug!("Bucket '{}' already exists", self.config.bucket_name);
            return Ok(());
        }

        warn!(
            "Bucket '{}' does not exist, creating it",
            self.config.bucket_name
        );

        let make_bucket_args = MakeBucketArgs::new(&self.config.bucket_name)
            .map_err(|e| MediaStoreError::InvalidArguments(e.to_string()))?;

        self.client.make_bucket(&make_bucket_args).await.map_err(|e| {
            error!("Failed to create bucket '{}': {}", self.config.bucket_name, e);
            MediaStoreError::OperationError(format!("Bucket creation failed: {}", e))
        })?;

        info!("Created bucket '{}'", self.config.bucket_name);
        Ok(())
    }

    /// Upload an object and return nothing; the caller builds the public URL
    #[instrument(skip(self, data), fields(object_name = %object_name, size = data.len()))]
    pub async fn put_object(
        &self,
        object_name: &str,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), MediaStoreError> {
        info!(
            "Uploading object '{}' to bucket '{}'",
            object_name, self.config.bucket_name
        );

        let bucket_name = self.config.bucket_name.clone();
        let object_name_owned = object_name.to_string();
        let client = self.client.clone();
        let content_type_owned = content_type.map(|ct| ct.to_string());

        tokio::task::spawn_blocking(move || {
            let mut reader = Cursor::new(data);
            let data_len = reader.get_ref().len();

            // Keep the content_type String alive for the duration of args
            let ct_holder = content_type_owned;

            let mut args = PutObjectArgs::new(
                &bucket_name,
                &object_name_owned,
                &mut reader,
                Some(data_len),
                None,
            )
            .map_err(|e| MediaStoreError::InvalidArguments(e.to_string()))?;

            if let Some(ref ct) = ct_holder {
                args.content_type = ct;
            }

            futures::executor::block_on(client.put_object(&mut args))
                .map_err(|e| MediaStoreError::OperationError(format!("Upload failed: {}", e)))?;

            info!("Successfully uploaded object '{}'", &object_name_owned);
            Ok(())
        })
        .await
        .map_err(|e| {
            error!("Failed to join blocking task for put_object: {}", e);
            MediaStoreError::OperationError(format!("Join error: {}", e))
        })??;
        Ok(())
    }

    /// Delete an object
    #[instrument(skip(self), fields(object_name = %object_name))]
    pub async fn remove_object(&self, object_name: &str) -> Result<(), MediaStoreError> {
        let args = RemoveObjectArgs::new(&self.config.bucket_name, object_name)
            .map_err(|e| MediaStoreError::InvalidArguments(e.to_string()))?;

        self.client.remove_object(&args).await.map_err(|e| {
            error!("Failed to delete object '{}': {}", object_name, e);
            MediaStoreError::OperationError(format!("Delete failed: {}", e))
        })?;

        info!("Deleted object '{}'", object_name);
        Ok(())
    }

    /// Public download link for a stored object
    pub fn public_url(&self, object_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.links_prefix.trim_end_matches('/'),
            self.config.bucket_name,
            object_name
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MediaStoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
