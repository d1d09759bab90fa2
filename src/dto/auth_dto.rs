use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::admin::Admin;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "a valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAdminRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(email(message = "a valid email is required"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,

    pub photo: Option<String>,
}

/// Admin record as listed in the back-office: never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        AdminResponse {
            id: admin.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: admin.name,
            email: admin.email,
            phone: admin.phone,
            profile_photo: admin.profile_photo,
            created_at: admin.created_at,
        }
    }
}
