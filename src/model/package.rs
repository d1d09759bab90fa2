use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PackageType {
    Couple,
    Common,
    Customized,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub package_type: PackageType,
    pub title: String,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
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
    #[serde(default)]
    pub images: Vec<String>,
    /// Offer annotation: active iff offer_percent > 0 or offer_text is
    /// non-empty. Cleared as a pair, never half-cleared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_text: Option<String>,
    #[serde(default)]
    pub offer_percent: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Package {
    pub fn has_offer(&self) -> bool {
        self.offer_percent > 0.0
            || self
                .offer_text
                .as_deref()
                .is_some_and(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_package() -> Package {
        Package {
            id: None,
            package_type: PackageType::Common,
            title: "Kerala Backwaters".to_string(),
            destination: "Alleppey".to_string(),
            duration: None,
            starting_price: 12000.0,
            min_people: None,
            description: None,
            itinerary: None,
            inclusions: None,
            exclusions: None,
            images: Vec::new(),
            offer_text: None,
            offer_percent: 0.0,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn offer_active_with_percent_only() {
        let mut pkg = base_package();
        pkg.offer_percent = 10.0;
        assert!(pkg.has_offer());
    }

    #[test]
    fn offer_active_with_text_only() {
        let mut pkg = base_package();
        pkg.offer_text = Some("Monsoon special".to_string());
        assert!(pkg.has_offer());
    }

    #[test]
    fn no_offer_when_both_cleared() {
        let mut pkg = base_package();
        pkg.offer_text = Some("   ".to_string());
        pkg.offer_percent = 0.0;
        assert!(!pkg.has_offer());
    }

    #[test]
    fn missing_document_fields_take_defaults() {
        let json = r#"{
            "packageType": "COUPLE",
            "title": "Honeymoon",
            "destination": "Ooty",
            "startingPrice": 20000
        }"#;
        let pkg: Package = serde_json::from_str(json).unwrap();
        assert!(pkg.is_active);
        assert_eq!(pkg.offer_percent, 0.0);
        assert!(pkg.images.is_empty());
    }
}
