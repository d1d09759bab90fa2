use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

/// One media asset attached to a gallery item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
}

/// A customer-story record bundling media assets with a destination.
///
/// Two document shapes coexist in the collection: the current shape carries
/// a `media` array, legacy documents carry a single `mediaUrl`/`mediaType`
/// pair. Reads go through [`GalleryItem::normalized_media`] so consumers
/// only ever see the array shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<Media>>,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Deprecated single-media fields, read-only fallback for legacy documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl GalleryItem {
    /// Reconcile the legacy single-media shape with the current array shape.
    ///
    /// - a non-empty `media` array is returned unchanged (first element is
    ///   the cover);
    /// - otherwise a legacy `mediaUrl` is lifted into a single-element array,
    ///   defaulting the type to image;
    /// - otherwise the result is empty and callers hide the item.
    ///
    /// Total and idempotent.
    pub fn normalized_media(&self) -> Vec<Media> {
        if let Some(media) = &self.media {
            if !media.is_empty() {
                return media.clone();
            }
        }
        if let Some(url) = &self.media_url {
            return vec![Media {
                url: url.clone(),
                media_type: self.media_type.unwrap_or_default(),
            }];
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_item(url: &str, media_type: Option<MediaType>) -> GalleryItem {
        GalleryItem {
            id: None,
            media: None,
            destination: "Munnar".to_string(),
            description: None,
            customer_name: None,
            media_url: Some(url.to_string()),
            media_type,
            created_at: None,
        }
    }

    #[test]
    fn current_shape_is_returned_unchanged() {
        let media = vec![
            Media {
                url: "a.jpg".to_string(),
                media_type: MediaType::Image,
            },
            Media {
                url: "b.mp4".to_string(),
                media_type: MediaType::Video,
            },
        ];
        let item = GalleryItem {
            media: Some(media.clone()),
            ..legacy_item("ignored.jpg", None)
        };
        assert_eq!(item.normalized_media(), media);
    }

    #[test]
    fn legacy_shape_is_lifted_into_single_element_array() {
        let item = legacy_item("old.jpg", Some(MediaType::Video));
        let media = item.normalized_media();
        assert_eq!(media.len(), 1);
        assert_eq!(media[0].url, "old.jpg");
        assert_eq!(media[0].media_type, MediaType::Video);
    }

    #[test]
    fn legacy_shape_defaults_type_to_image() {
        let item = legacy_item("old.jpg", None);
        assert_eq!(item.normalized_media()[0].media_type, MediaType::Image);
    }

    #[test]
    fn item_without_any_media_normalizes_to_empty() {
        let mut item = legacy_item("x", None);
        item.media_url = None;
        assert!(item.normalized_media().is_empty());
        // An empty media array does not shadow the legacy fallback
        item.media = Some(Vec::new());
        item.media_url = Some("old.jpg".to_string());
        assert_eq!(item.normalized_media().len(), 1);
    }

    #[test]
    fn normalization_is_idempotent() {
        let legacy = legacy_item("old.jpg", None);
        let once = legacy.normalized_media();
        let renormalized = GalleryItem {
            media: Some(once.clone()),
            media_url: legacy.media_url.clone(),
            media_type: legacy.media_type,
            ..legacy
        };
        assert_eq!(renormalized.normalized_media(), once);
    }
}
