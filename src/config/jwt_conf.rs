use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// JWT configuration structure
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub jwt_secret: String,
    /// Token expiration time in minutes
    pub token_expiration: i64,
    /// JWT issuer (optional)
    pub jwt_issuer: Option<String>,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    ///
    /// Expected environment variables:
    /// - JWT_SECRET: Secret key for signing JWT tokens (required)
    /// - JWT_TOKEN_EXPIRY: Token expiration in minutes (defaults to 43200 = 30 days)
    /// - JWT_ISSUER: JWT issuer (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading JWT configuration from environment variables");

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| {
            error!("JWT_SECRET environment variable not found");
            ConfigError::EnvVarNotFound("JWT_SECRET".to_string())
        })?;

        if jwt_secret.len() < 32 {
            error!("JWT_SECRET is too short (minimum 32 characters required)");
            return Err(ConfigError::InvalidValue(
                "JWT_SECRET must be at least 32 characters long".to_string(),
            ));
        }
        debug!("JWT secret loaded (length: {} chars)", jwt_secret.len());

        let token_expiration = env::var("JWT_TOKEN_EXPIRY")
            .unwrap_or_else(|_| {
                warn!("JWT_TOKEN_EXPIRY not set, using default: 43200 minutes (30 days)");
                "43200".to_string()
            })
            .parse::<i64>()
            .map_err(|e| {
                error!("Invalid JWT_TOKEN_EXPIRY value: {}", e);
                ConfigError::InvalidValue(format!("JWT_TOKEN_EXPIRY: {}", e))
            })?;

        if token_expiration <= 0 {
            error!("JWT_TOKEN_EXPIRY must be greater than 0");
            return Err(ConfigError::InvalidValue(
                "JWT_TOKEN_EXPIRY must be greater than 0".to_string(),
            ));
        }
        debug!("JWT token expiration: {} minutes", token_expiration);

        let jwt_issuer = env::var("JWT_ISSUER").ok();

        let config = JwtConfig {
            jwt_secret,
            token_expiration,
            jwt_issuer,
        };

        config.validate()?;
        info!("JWT configuration loaded successfully");
        Ok(config)
    }

    /// Validate the JWT configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            error!("JWT secret cannot be empty");
            return Err(ConfigError::ValidationError(
                "JWT secret cannot be empty".to_string(),
            ));
        }

        if self.jwt_secret.len() < 32 {
            error!("JWT secret is too short (minimum 32 characters required)");
            return Err(ConfigError::ValidationError(
                "JWT secret must be at least 32 characters long".to_string(),
            ));
        }

        if self.token_expiration <= 0 {
            error!("Token expiration must be greater than 0");
            return Err(ConfigError::ValidationError(
                "Token expiration must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// JWT configuration for testing with default values
impl Default for JwtConfig {
    fn default() -> Self {
        JwtConfig {
            jwt_secret: "test_secret_key_for_jwt_testing_should_be_long_enough_for_security"
                .to_string(),
            token_expiration: 43200,
            jwt_issuer: Some("aaliya-backend-test".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = JwtConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_short_secret() {
        let mut config = JwtConfig::default();
        config.jwt_secret = "short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_expiration() {
        let mut config = JwtConfig::default();
        config.token_expiration = 0;
        assert!(config.validate().is_err());
    }
}
