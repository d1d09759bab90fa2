use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::package::PackageType;

/// Payload for both package create and update. The admin form always sends
/// the full record, so updates replace the provided fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPackageRequest {
    pub package_type: PackageType,

    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "destination is required"))]
    pub destination: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[validate(range(min = 0.0, message = "startingPrice must not be negative"))]
    pub starting_price: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_people: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Bulk offer application over all or selected packages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyOfferRequest {
    /// "ALL" or "SELECTED"
    pub target: String,
    pub package_ids: Option<Vec<String>>,
    pub offer_text: Option<String>,
    pub offer_percent: Option<f64>,
}
