pub mod auth_service;
pub mod catalog_service;
pub mod enquiry_service;
pub mod gallery_service;
pub mod site_service;

use bson::oid::ObjectId;

use crate::util::error::ServiceError;

/// Parse a path/body id into an ObjectId, rejecting malformed values as
/// client errors rather than storage errors.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, ServiceError> {
    ObjectId::parse_str(id)
        .map_err(|_| ServiceError::InvalidInput(format!("Invalid id: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_ids_parse() {
        assert!(parse_object_id("65f0c1a2b3d4e5f601234567").is_ok());
    }

    #[test]
    fn malformed_ids_are_invalid_input() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(ServiceError::InvalidInput(_))
        ));
    }
}
