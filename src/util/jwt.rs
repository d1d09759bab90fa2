use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::config::JwtConfig;

/// JWT token claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (admin ID)
    pub sub: String,
    /// Admin email
    pub email: String,
    /// Role, always "admin" for back-office tokens
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

/// Error types for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Failed to encode JWT token: {0}")]
    EncodingFailed(String),
    #[error("Failed to decode JWT token: {0}")]
    DecodingFailed(String),
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token format")]
    InvalidToken,
}

pub trait JwtTokenUtils {
    fn generate_token(&self, admin_id: &str, email: &str) -> Result<String, JwtError>;
    fn validate_token(&self, token: &str) -> Result<Claims, JwtError>;
    fn extract_token_from_header(&self, auth_header: &str) -> Result<String, JwtError>;
}

#[derive(Debug, Clone)]
pub struct JwtTokenUtilsImpl {
    pub jwt_config: JwtConfig,
}

impl JwtTokenUtilsImpl {
    pub fn new(jwt_config: JwtConfig) -> Self {
        JwtTokenUtilsImpl { jwt_config }
    }
}

impl JwtTokenUtils for JwtTokenUtilsImpl {
    fn generate_token(&self, admin_id: &str, email: &str) -> Result<String, JwtError> {
        debug!("Generating token for admin: {}", admin_id);

        let now = Utc::now();
        let expiration = now + Duration::minutes(self.jwt_config.token_expiration);

        let claims = Claims {
            sub: admin_id.to_string(),
            email: email.to_string(),
            role: "admin".to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let header = Header::new(Algorithm::HS256);
        let encoding_key = EncodingKey::from_secret(self.jwt_config.jwt_secret.as_ref());

        encode(&header, &claims, &encoding_key).map_err(|err| {
            error!("Failed to encode JWT token: {}", err);
            JwtError::EncodingFailed(err.to_string())
        })
    }

    fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        debug!("Validating JWT token");

        let decoding_key = DecodingKey::from_secret(self.jwt_config.jwt_secret.as_ref());
        let validation = Validation::new(Algorithm::HS256);

        match decode::<Claims>(token, &decoding_key, &validation) {
            Ok(token_data) => {
                let claims = token_data.claims;
                if claims.exp < Utc::now().timestamp() {
                    warn!("Token has expired for admin: {}", claims.sub);
                    return Err(JwtError::TokenExpired);
                }
                debug!("Token validation successful for admin: {}", claims.sub);
                Ok(claims)
            }
            Err(err) => {
                error!("Failed to decode JWT token: {}", err);
                Err(JwtError::DecodingFailed(err.to_string()))
            }
        }
    }

    fn extract_token_from_header(&self, auth_header: &str) -> Result<String, JwtError> {
        if !auth_header.starts_with("Bearer ") {
            error!("Invalid authorization header format");
            return Err(JwtError::InvalidToken);
        }

        let token = auth_header.trim_start_matches("Bearer ").trim();
        if token.is_empty() {
            error!("Empty token in authorization header");
            return Err(JwtError::InvalidToken);
        }

        Ok(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utils() -> JwtTokenUtilsImpl {
        JwtTokenUtilsImpl::new(JwtConfig::default())
    }

    #[test]
    fn generated_token_round_trips() {
        let utils = utils();
        let token = utils
            .generate_token("65f0c1a2b3d4e5f601234567", "admin@example.com")
            .unwrap();
        let claims = utils.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "65f0c1a2b3d4e5f601234567");
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn tampered_token_is_rejected() {
        let utils = utils();
        let mut token = utils.generate_token("id", "a@b.com").unwrap();
        token.push('x');
        assert!(utils.validate_token(&token).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let utils = utils();
        let token = utils.generate_token("id", "a@b.com").unwrap();

        let mut other_config = JwtConfig::default();
        other_config.jwt_secret =
            "a_completely_different_secret_key_that_is_long_enough".to_string();
        let other = JwtTokenUtilsImpl::new(other_config);
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn extract_token_requires_bearer_scheme() {
        let utils = utils();
        assert!(utils.extract_token_from_header("Basic abc").is_err());
        assert!(utils.extract_token_from_header("Bearer ").is_err());
        assert_eq!(
            utils.extract_token_from_header("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
    }
}
