use serde::{Deserialize, Serialize};
use std::env;

use crate::config::ConfigError;

/// Credentials for the first admin user created at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserConfig {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

impl AdminUserConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(AdminUserConfig {
            name: env::var("ADMIN_NAME")
                .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_NAME".to_string()))?,
            email: env::var("ADMIN_EMAIL")
                .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_EMAIL".to_string()))?,
            phone: env::var("ADMIN_PHONE").ok(),
            password: env::var("ADMIN_PASSWORD")
                .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_PASSWORD".to_string()))?,
        })
    }
}
