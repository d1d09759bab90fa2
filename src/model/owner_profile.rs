use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Singleton profile document shown on the storefront. Updated with
/// find-one-or-create semantics rather than being keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProfile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default = "default_display_name")]
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_handle: Option<String>,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_display_name() -> String {
    "Unknown".to_string()
}

fn default_description() -> String {
    "Travel Consultant / Founder of Aaliya Trip Planners".to_string()
}

impl Default for OwnerProfile {
    fn default() -> Self {
        OwnerProfile {
            id: None,
            display_name: default_display_name(),
            owner_image: None,
            contact_phone: None,
            instagram_handle: None,
            description: default_description(),
            created_at: None,
            updated_at: None,
        }
    }
}
