use aaliya_backend::model::enquiry::{Enquiry, EnquiryStatus, EnquiryType};
use aaliya_backend::util::export::{enquiries_to_csv, filter_enquiries};

fn enquiry(
    name: &str,
    contact: &str,
    status: EnquiryStatus,
    created_at: &str,
) -> Enquiry {
    Enquiry {
        id: None,
        enquiry_type: EnquiryType::Package,
        package_type: Some("COUPLE".to_string()),
        package_id: None,
        transport_id: None,
        pickup_location: None,
        drop_location: None,
        destination: Some("Kochi".to_string()),
        duration: Some("2D/1N".to_string()),
        people_count: Some(2),
        travel_date: None,
        customer_name: name.to_string(),
        contact: contact.to_string(),
        message: "Please share the itinerary".to_string(),
        status,
        notes: None,
        created_at: Some(created_at.to_string()),
        updated_at: None,
    }
}

#[test]
fn filtered_export_round_trip() {
    let rows = vec![
        enquiry("Asha Menon", "9847000001", EnquiryStatus::Pending, "2025-01-09T10:00:00Z"),
        enquiry("Binu Thomas", "9847000002", EnquiryStatus::Contacted, "2025-02-14T10:00:00Z"),
        enquiry("Asha Nair", "9847000003", EnquiryStatus::Contacted, "2025-11-30T10:00:00Z"),
    ];

    let filtered = filter_enquiries(&rows, Some(EnquiryStatus::Contacted), Some("asha"));
    assert_eq!(filtered.len(), 1);

    let csv = enquiries_to_csv(&filtered);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Date,Status,Customer Name,Contact,Type,Destination,Message"
    );
    assert_eq!(
        lines.next().unwrap(),
        "30/11/2025,CONTACTED,Asha Nair,9847000003,PACKAGE,Kochi,Please share the itinerary"
    );
    assert!(lines.next().is_none());
}

#[test]
fn export_of_empty_list_is_header_only() {
    let csv = enquiries_to_csv(&[]);
    assert_eq!(csv, "Date,Status,Customer Name,Contact,Type,Destination,Message\n");
}

#[test]
fn filter_preserves_input_order() {
    let rows = vec![
        enquiry("C", "3", EnquiryStatus::Pending, "2025-01-01T00:00:00Z"),
        enquiry("A", "1", EnquiryStatus::Pending, "2025-01-02T00:00:00Z"),
        enquiry("B", "2", EnquiryStatus::Pending, "2025-01-03T00:00:00Z"),
    ];
    let got = filter_enquiries(&rows, Some(EnquiryStatus::Pending), None);
    let names: Vec<_> = got.iter().map(|e| e.customer_name.as_str()).collect();
    assert_eq!(names, ["C", "A", "B"]);
}
