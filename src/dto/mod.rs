pub mod auth_dto;
pub mod enquiry_dto;
pub mod gallery_dto;
pub mod package_dto;
pub mod profile_dto;
pub mod review_dto;
pub mod transport_dto;
pub mod upload_dto;
