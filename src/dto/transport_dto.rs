use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertTransportRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 1, message = "capacity must be at least 1"))]
    pub capacity: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, message = "pricePerKm must not be negative"))]
    pub price_per_km: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
