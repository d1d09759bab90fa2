pub mod error;
pub mod export;
pub mod jwt;
pub mod logger;
pub mod minio;
pub mod password;
