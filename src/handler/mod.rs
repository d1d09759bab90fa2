pub mod auth_handler;
pub mod catalog_handler;
pub mod enquiry_handler;
pub mod gallery_handler;
pub mod site_handler;
pub mod upload_handler;
