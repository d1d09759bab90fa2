use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Kind of booking a customer is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnquiryType {
    Package,
    Room,
    Transport,
    Custom,
    CouplePackage,
    CommonPackage,
}

impl EnquiryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryType::Package => "PACKAGE",
            EnquiryType::Room => "ROOM",
            EnquiryType::Transport => "TRANSPORT",
            EnquiryType::Custom => "CUSTOM",
            EnquiryType::CouplePackage => "COUPLE_PACKAGE",
            EnquiryType::CommonPackage => "COMMON_PACKAGE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PACKAGE" => Some(EnquiryType::Package),
            "ROOM" => Some(EnquiryType::Room),
            "TRANSPORT" => Some(EnquiryType::Transport),
            "CUSTOM" => Some(EnquiryType::Custom),
            "COUPLE_PACKAGE" => Some(EnquiryType::CouplePackage),
            "COMMON_PACKAGE" => Some(EnquiryType::CommonPackage),
            _ => None,
        }
    }
}

/// Triage state of an enquiry. New enquiries start PENDING; the admin moves
/// them freely between states (no transition table is enforced).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnquiryStatus {
    #[default]
    Pending,
    Contacted,
    Converted,
    Closed,
}

impl EnquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryStatus::Pending => "PENDING",
            EnquiryStatus::Contacted => "CONTACTED",
            EnquiryStatus::Converted => "CONVERTED",
            EnquiryStatus::Closed => "CLOSED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(EnquiryStatus::Pending),
            "CONTACTED" => Some(EnquiryStatus::Contacted),
            "CONVERTED" => Some(EnquiryStatus::Converted),
            "CLOSED" => Some(EnquiryStatus::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub enquiry_type: EnquiryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_date: Option<String>,
    pub customer_name: String,
    pub contact: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: EnquiryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_round_trips_every_variant() {
        for status in [
            EnquiryStatus::Pending,
            EnquiryStatus::Contacted,
            EnquiryStatus::Converted,
            EnquiryStatus::Closed,
        ] {
            assert_eq!(EnquiryStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert_eq!(EnquiryStatus::parse("ARCHIVED"), None);
        assert_eq!(EnquiryStatus::parse("pending"), None);
        assert_eq!(EnquiryStatus::parse(""), None);
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(EnquiryStatus::default(), EnquiryStatus::Pending);
    }

    #[test]
    fn enquiry_type_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&EnquiryType::CouplePackage).unwrap();
        assert_eq!(json, "\"COUPLE_PACKAGE\"");
        let parsed: EnquiryType = serde_json::from_str("\"COMMON_PACKAGE\"").unwrap();
        assert_eq!(parsed, EnquiryType::CommonPackage);
    }

    #[test]
    fn message_defaults_to_empty_on_documents_without_one() {
        let enquiry: Enquiry = serde_json::from_value(serde_json::json!({
            "enquiryType": "CUSTOM",
            "customerName": "Asha",
            "contact": "9847000001"
        }))
        .unwrap();
        assert_eq!(enquiry.message, "");
        assert_eq!(enquiry.status, EnquiryStatus::Pending);
    }
}
