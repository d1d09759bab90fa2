use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::config::AdminUserConfig;
use crate::dto::auth_dto::{AdminResponse, CreateAdminRequest, LoginRequest, LoginResponse};
use crate::model::admin::Admin;
use crate::repository::admin_repo::{AdminRepository, MongoAdminRepository};
use crate::util::error::ServiceError;
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};
use crate::util::password;

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Back-office login. Wrong email and wrong password are reported the
    /// same way so the endpoint does not leak which accounts exist.
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ServiceError>;
    async fn create_admin(&self, request: CreateAdminRequest)
        -> Result<AdminResponse, ServiceError>;
    async fn list_admins(&self) -> Result<Vec<AdminResponse>, ServiceError>;
    async fn delete_admin(&self, id: &str) -> Result<(), ServiceError>;
    /// Seed the first admin account from configuration on a fresh database
    async fn create_first_admin_user(&self, config: &AdminUserConfig) -> Result<(), ServiceError>;
}

pub struct AuthServiceImpl {
    pub admin_repo: Arc<MongoAdminRepository>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl AuthServiceImpl {
    pub fn new(admin_repo: Arc<MongoAdminRepository>, jwt_utils: Arc<JwtTokenUtilsImpl>) -> Self {
        Self {
            admin_repo,
            jwt_utils,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        let admin = match self.admin_repo.find_by_email(&request.email).await? {
            Some(admin) => admin,
            None => {
                warn!("Login attempt for unknown email");
                return Err(ServiceError::Unauthorized(
                    "Invalid email or password".to_string(),
                ));
            }
        };

        let valid = password::verify_password(&request.password, &admin.password_hash)
            .map_err(|e| ServiceError::InternalError(format!("Password verify error: {}", e)))?;
        if !valid {
            warn!("Login attempt with wrong password");
            return Err(ServiceError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let admin_id = admin.id.map(|id| id.to_hex()).unwrap_or_default();
        let token = self
            .jwt_utils
            .generate_token(&admin_id, &admin.email)
            .map_err(|e| {
                error!("Failed to issue token: {}", e);
                ServiceError::InternalError(format!("JWT error: {}", e))
            })?;

        info!("Admin logged in");
        Ok(LoginResponse {
            id: admin_id,
            name: admin.name,
            email: admin.email,
            token,
        })
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn create_admin(
        &self,
        request: CreateAdminRequest,
    ) -> Result<AdminResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        if self
            .admin_repo
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            warn!("Admin creation rejected: email already registered");
            return Err(ServiceError::InvalidInput(
                "Admin with this email already exists".to_string(),
            ));
        }

        let password_hash = password::hash_password(&request.password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;

        let admin = Admin {
            id: None,
            name: request.name,
            email: request.email,
            phone: request.phone,
            password_hash,
            profile_photo: request.photo,
            created_at: None,
            updated_at: None,
        };

        let created = self.admin_repo.create(admin).await?;
        info!("Admin account created");
        Ok(AdminResponse::from(created))
    }

    #[instrument(skip(self))]
    async fn list_admins(&self) -> Result<Vec<AdminResponse>, ServiceError> {
        let admins = self.admin_repo.list().await?;
        Ok(admins.into_iter().map(AdminResponse::from).collect())
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_admin(&self, id: &str) -> Result<(), ServiceError> {
        let oid = super::parse_object_id(id)?;
        self.admin_repo.delete(oid).await?;
        info!("Admin account deleted");
        Ok(())
    }

    #[instrument(skip(self, config), fields(email = %config.email))]
    async fn create_first_admin_user(&self, config: &AdminUserConfig) -> Result<(), ServiceError> {
        if self.admin_repo.find_by_email(&config.email).await?.is_some() {
            info!("Bootstrap admin already present, skipping seed");
            return Ok(());
        }

        let password_hash = password::hash_password(&config.password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;

        let admin = Admin {
            id: None,
            name: config.name.clone(),
            email: config.email.clone(),
            phone: config.phone.clone(),
            password_hash,
            profile_photo: None,
            created_at: None,
            updated_at: None,
        };

        self.admin_repo.create(admin).await?;
        info!("Bootstrap admin account seeded");
        Ok(())
    }
}
