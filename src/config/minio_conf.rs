use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Configuration for the S3-compatible media store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinioConfig {
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket_name: String,
    /// Public prefix used to build download links returned to clients
    pub links_prefix: String,
    pub secure: bool,
    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
}

impl MinioConfig {
    /// Load media store configuration from environment variables
    ///
    /// Expected environment variables:
    /// - MINIO_ENDPOINT: server endpoint, e.g. "localhost:9000" (required)
    /// - MINIO_ACCESS_KEY: access key (required)
    /// - MINIO_SECRET_KEY: secret key (required)
    /// - MINIO_BUCKET_NAME: bucket for uploaded media (required)
    /// - MINIO_LINKS_PREFIX: public URL prefix for download links
    /// - MINIO_SECURE: whether to use HTTPS (defaults to false)
    /// - MEDIA_MAX_UPLOAD_MB: upload cap in megabytes (defaults to 50)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading media store configuration from environment variables");

        let endpoint = env::var("MINIO_ENDPOINT").map_err(|_| {
            error!("MINIO_ENDPOINT environment variable not found");
            ConfigError::EnvVarNotFound("MINIO_ENDPOINT".to_string())
        })?;
        debug!("MinIO endpoint: {}", endpoint);

        let access_key = env::var("MINIO_ACCESS_KEY").map_err(|_| {
            error!("MINIO_ACCESS_KEY environment variable not found");
            ConfigError::EnvVarNotFound("MINIO_ACCESS_KEY".to_string())
        })?;

        let secret_key = env::var("MINIO_SECRET_KEY").map_err(|_| {
            error!("MINIO_SECRET_KEY environment variable not found");
            ConfigError::EnvVarNotFound("MINIO_SECRET_KEY".to_string())
        })?;

        let bucket_name = env::var("MINIO_BUCKET_NAME").map_err(|_| {
            error!("MINIO_BUCKET_NAME environment variable not found");
            ConfigError::EnvVarNotFound("MINIO_BUCKET_NAME".to_string())
        })?;
        debug!("MinIO bucket name: {}", bucket_name);

        let secure = env::var("MINIO_SECURE")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .unwrap_or_else(|_| {
                warn!("Invalid MINIO_SECURE value, defaulting to false");
                false
            });

        let links_prefix = env::var("MINIO_LINKS_PREFIX").unwrap_or_else(|_| {
            warn!("MINIO_LINKS_PREFIX not set, using default: http://127.0.0.1:9000");
            "http://127.0.0.1:9000".to_string()
        });

        let max_upload_bytes = env::var("MEDIA_MAX_UPLOAD_MB")
            .unwrap_or_else(|_| {
                warn!("MEDIA_MAX_UPLOAD_MB not set, using default: 50");
                "50".to_string()
            })
            .parse::<usize>()
            .map_err(|_| {
                error!("Invalid MEDIA_MAX_UPLOAD_MB value");
                ConfigError::InvalidValue("Invalid MEDIA_MAX_UPLOAD_MB value".to_string())
            })?
            * 1024
            * 1024;

        let config = Self {
            endpoint,
            access_key,
            secret_key,
            bucket_name,
            links_prefix,
            secure,
            max_upload_bytes,
        };

        config.validate()?;
        info!("Media store configuration loaded successfully");
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.is_empty() {
            error!("MinIO endpoint is empty");
            return Err(ConfigError::ValidationError(
                "Endpoint cannot be empty".to_string(),
            ));
        }

        if self.access_key.is_empty() {
            error!("MinIO access key is empty");
            return Err(ConfigError::ValidationError(
                "Access key cannot be empty".to_string(),
            ));
        }

        if self.secret_key.is_empty() {
            error!("MinIO secret key is empty");
            return Err(ConfigError::ValidationError(
                "Secret key cannot be empty".to_string(),
            ));
        }

        if self.bucket_name.is_empty() {
            error!("MinIO bucket name is empty");
            return Err(ConfigError::ValidationError(
                "Bucket name cannot be empty".to_string(),
            ));
        }

        if self.max_upload_bytes == 0 {
            error!("Upload size cap is 0");
            return Err(ConfigError::ValidationError(
                "Upload size cap must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Full endpoint URL including scheme
    pub fn get_endpoint_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}", scheme, self.endpoint)
    }
}

impl Default for MinioConfig {
    fn default() -> Self {
        MinioConfig {
            endpoint: "localhost:9000".to_string(),
            access_key: "minioadmin".to_string(),
            secret_key: "minioadmin".to_string(),
            bucket_name: "aaliya-media".to_string(),
            links_prefix: "http://localhost:9000".to_string(),
            secure: false,
            max_upload_bytes: 50 * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MinioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
    }

    #[test]
    fn test_endpoint_url_scheme() {
        let mut config = MinioConfig::default();
        assert_eq!(config.get_endpoint_url(), "http://localhost:9000");
        config.secure = true;
        assert_eq!(config.get_endpoint_url(), "https://localhost:9000");
    }

    #[test]
    fn test_validate_empty_bucket() {
        let mut config = MinioConfig::default();
        config.bucket_name = "".to_string();
        assert!(config.validate().is_err());
    }
}
