use aaliya_backend::dto::auth_dto::{CreateAdminRequest, LoginRequest};
use aaliya_backend::dto::enquiry_dto::{CreateEnquiryRequest, UpdateEnquiryStatusRequest};
use aaliya_backend::dto::gallery_dto::{CreateGalleryRequest, GalleryItemResponse};
use aaliya_backend::dto::package_dto::ApplyOfferRequest;
use aaliya_backend::model::gallery::{GalleryItem, MediaType};
use serde_json::json;
use validator::Validate;

#[test]
fn enquiry_request_accepts_the_storefront_payload() {
    let payload = json!({
        "enquiryType": "COUPLE_PACKAGE",
        "packageType": "COUPLE",
        "destination": "Munnar",
        "peopleCount": 2,
        "name": "Asha Menon",
        "phone": "9847000001",
        "message": "Dates are flexible"
    });
    let request: CreateEnquiryRequest = serde_json::from_value(payload).unwrap();
    assert!(request.validate().is_ok());
    assert_eq!(request.enquiry_type, "COUPLE_PACKAGE");
    assert_eq!(request.name, "Asha Menon");
}

#[test]
fn enquiry_request_rejects_blank_name() {
    let payload = json!({
        "enquiryType": "CUSTOM",
        "name": "",
        "phone": "9847000001"
    });
    let request: CreateEnquiryRequest = serde_json::from_value(payload).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn triage_update_is_partial() {
    let notes_only: UpdateEnquiryStatusRequest =
        serde_json::from_value(json!({ "notes": "Called, call back Friday" })).unwrap();
    assert!(notes_only.status.is_none());
    assert_eq!(notes_only.notes.as_deref(), Some("Called, call back Friday"));

    let status_only: UpdateEnquiryStatusRequest =
        serde_json::from_value(json!({ "status": "CONTACTED" })).unwrap();
    assert_eq!(status_only.status.as_deref(), Some("CONTACTED"));
    assert!(status_only.notes.is_none());
}

#[test]
fn offer_request_uses_camel_case_keys() {
    let request: ApplyOfferRequest = serde_json::from_value(json!({
        "target": "SELECTED",
        "packageIds": ["65f0c1a2b3d4e5f601234567"],
        "offerText": "Monsoon deal",
        "offerPercent": 10.0
    }))
    .unwrap();
    assert_eq!(request.target, "SELECTED");
    assert_eq!(request.package_ids.unwrap().len(), 1);
}

#[test]
fn gallery_request_enforces_the_media_bounds() {
    let empty: CreateGalleryRequest = serde_json::from_value(json!({
        "media": [],
        "destination": "Varkala"
    }))
    .unwrap();
    assert!(empty.validate().is_err());

    let four: CreateGalleryRequest = serde_json::from_value(json!({
        "media": [
            { "url": "https://media.example/a.jpg", "type": "image" },
            { "url": "https://media.example/b.jpg", "type": "image" },
            { "url": "https://media.example/c.mp4", "type": "video" },
            { "url": "https://media.example/d.jpg", "type": "image" }
        ],
        "destination": "Varkala"
    }))
    .unwrap();
    assert!(four.validate().is_err());
}

#[test]
fn legacy_gallery_document_is_normalized_in_the_response() {
    let legacy: GalleryItem = serde_json::from_value(json!({
        "destination": "Thekkady",
        "mediaUrl": "https://media.example/old.jpg"
    }))
    .unwrap();
    let response = GalleryItemResponse::from(legacy);
    assert_eq!(response.media.len(), 1);
    assert_eq!(response.media[0].url, "https://media.example/old.jpg");
    assert_eq!(response.media[0].media_type, MediaType::Image);

    let as_json = serde_json::to_value(&response).unwrap();
    assert_eq!(as_json["media"][0]["type"], "image");
    assert!(as_json.get("mediaUrl").is_none());
}

#[test]
fn login_request_requires_a_well_formed_email() {
    let bad: LoginRequest =
        serde_json::from_value(json!({ "email": "not-an-email", "password": "x" })).unwrap();
    assert!(bad.validate().is_err());
}

#[test]
fn create_admin_requires_a_minimum_password_length() {
    let short: CreateAdminRequest = serde_json::from_value(json!({
        "name": "New Admin",
        "email": "new@example.com",
        "password": "12345"
    }))
    .unwrap();
    assert!(short.validate().is_err());

    let ok: CreateAdminRequest = serde_json::from_value(json!({
        "name": "New Admin",
        "email": "new@example.com",
        "password": "123456"
    }))
    .unwrap();
    assert!(ok.validate().is_ok());
}
