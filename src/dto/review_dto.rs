use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, message = "customerName is required"))]
    pub customer_name: String,

    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,

    pub comment: Option<String>,
    pub customer_photo: Option<String>,
    pub images: Option<Vec<String>>,
    pub is_visible: Option<bool>,
}
