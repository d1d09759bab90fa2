pub mod admin;
pub mod enquiry;
pub mod gallery;
pub mod owner_profile;
pub mod package;
pub mod review;
pub mod transport;
