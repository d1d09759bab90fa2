use serde::{Deserialize, Serialize};
use validator::Validate;

/// Public storefront enquiry submission. The storefront form sends the
/// customer fields as `name`/`phone`; they are stored as
/// `customerName`/`contact`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnquiryRequest {
    pub enquiry_type: String,

    pub package_type: Option<String>,
    pub package_id: Option<String>,
    pub transport_id: Option<String>,

    pub pickup_location: Option<String>,
    pub drop_location: Option<String>,

    pub destination: Option<String>,
    pub duration: Option<String>,
    pub people_count: Option<i32>,
    pub travel_date: Option<String>,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    pub message: Option<String>,
}

/// Admin triage update. Partial: only provided fields are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEnquiryStatusRequest {
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Enquiry as listed in the back-office: the referenced package and
/// transport are resolved to their display names so the list can show what
/// the customer asked about without extra round trips.
#[derive(Debug, Clone, Serialize)]
pub struct EnquiryListItem {
    #[serde(flatten)]
    pub enquiry: crate::model::enquiry::Enquiry,
    #[serde(rename = "packageTitle", skip_serializing_if = "Option::is_none")]
    pub package_title: Option<String>,
    #[serde(rename = "transportName", skip_serializing_if = "Option::is_none")]
    pub transport_name: Option<String>,
}

/// Query parameters shared by the admin list and CSV export endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnquiryListQuery {
    /// "ALL" or one of the status values
    pub status: Option<String>,
    /// Case-insensitive substring over customer name and contact
    pub q: Option<String>,
}
