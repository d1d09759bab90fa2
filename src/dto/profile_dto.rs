use serde::{Deserialize, Serialize};

/// Owner profile upsert: provided fields override, missing fields keep
/// their current (or default) values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOwnerProfileRequest {
    pub display_name: Option<String>,
    pub owner_image: Option<String>,
    pub contact_phone: Option<String>,
    pub instagram_handle: Option<String>,
    pub description: Option<String>,
}
