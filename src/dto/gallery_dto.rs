use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::gallery::{GalleryItem, Media};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryRequest {
    #[validate(length(min = 1, max = 3, message = "between 1 and 3 media items are required"))]
    pub media: Vec<Media>,

    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,

    pub description: Option<String>,
    pub customer_name: Option<String>,
}

/// Gallery item as served to clients: the media array is always present,
/// legacy records having been normalized at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub media: Vec<Media>,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl From<GalleryItem> for GalleryItemResponse {
    fn from(item: GalleryItem) -> Self {
        let media = item.normalized_media();
        GalleryItemResponse {
            id: item.id.map(|id| id.to_hex()).unwrap_or_default(),
            media,
            destination: item.destination,
            description: item.description,
            customer_name: item.customer_name,
            created_at: item.created_at,
        }
    }
}
