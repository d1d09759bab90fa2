pub mod admin_router;
pub mod auth_router;
pub mod public_router;
pub mod upload_router;
