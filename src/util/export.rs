//! Enquiry list filtering and CSV export.
//!
//! Both operations are pure so the admin endpoints can compose them with
//! whatever snapshot of the collection they already hold.

use chrono::DateTime;

use crate::model::enquiry::{Enquiry, EnquiryStatus};

/// Filter a snapshot of enquiries by status and a free-text needle.
///
/// The needle matches case-insensitively against the customer name and the
/// contact field. Input order is preserved.
pub fn filter_enquiries(
    enquiries: &[Enquiry],
    status: Option<EnquiryStatus>,
    query: Option<&str>,
) -> Vec<Enquiry> {
    let needle = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    enquiries
        .iter()
        .filter(|e| status.map_or(true, |s| e.status == s))
        .filter(|e| {
            needle.as_ref().map_or(true, |n| {
                e.customer_name.to_lowercase().contains(n)
                    || e.contact.to_lowercase().contains(n)
            })
        })
        .cloned()
        .collect()
}

/// Render enquiries as CSV with a fixed column set.
///
/// Dates come out as D/M/YYYY (no zero padding); records whose timestamp is
/// missing or unparseable get an empty date cell rather than failing the
/// whole export.
pub fn enquiries_to_csv(enquiries: &[Enquiry]) -> String {
    let mut out = String::from("Date,Status,Customer Name,Contact,Type,Destination,Message\n");

    for enquiry in enquiries {
        let row = [
            format_date(enquiry.created_at.as_deref()),
            enquiry.status.as_str().to_string(),
            enquiry.customer_name.clone(),
            enquiry.contact.clone(),
            enquiry.enquiry_type.as_str().to_string(),
            enquiry.destination.clone().unwrap_or_default(),
            collapse_newlines(&enquiry.message),
        ];

        let mut first = true;
        for field in row {
            if !first {
                out.push(',');
            }
            first = false;
            out.push_str(&escape_csv_field(&field));
        }
        out.push('\n');
    }

    out
}

fn format_date(created_at: Option<&str>) -> String {
    created_at
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.format("%-d/%-m/%Y").to_string())
        .unwrap_or_default()
}

fn collapse_newlines(message: &str) -> String {
    message.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::enquiry::EnquiryType;

    fn enquiry(name: &str, contact: &str, status: EnquiryStatus) -> Enquiry {
        Enquiry {
            id: None,
            enquiry_type: EnquiryType::Custom,
            package_type: None,
            package_id: None,
            transport_id: None,
            pickup_location: None,
            drop_location: None,
            destination: Some("Munnar".to_string()),
            duration: None,
            people_count: None,
            travel_date: None,
            customer_name: name.to_string(),
            contact: contact.to_string(),
            message: "Looking for a quote".to_string(),
            status,
            notes: None,
            created_at: Some("2025-03-05T09:30:00Z".to_string()),
            updated_at: None,
        }
    }

    #[test]
    fn filter_by_status_keeps_only_matching_rows() {
        let rows = vec![
            enquiry("Asha", "111", EnquiryStatus::Pending),
            enquiry("Binu", "222", EnquiryStatus::Contacted),
            enquiry("Chitra", "333", EnquiryStatus::Pending),
        ];
        let got = filter_enquiries(&rows, Some(EnquiryStatus::Pending), None);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].customer_name, "Asha");
        assert_eq!(got[1].customer_name, "Chitra");
    }

    #[test]
    fn text_filter_matches_name_and_contact_case_insensitively() {
        let rows = vec![
            enquiry("Asha Menon", "9847000001", EnquiryStatus::Pending),
            enquiry("Binu", "9847000002", EnquiryStatus::Pending),
        ];
        let by_name = filter_enquiries(&rows, None, Some("asha"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].customer_name, "Asha Menon");

        let by_contact = filter_enquiries(&rows, None, Some("0002"));
        assert_eq!(by_contact.len(), 1);
        assert_eq!(by_contact[0].customer_name, "Binu");
    }

    #[test]
    fn blank_query_is_a_no_op() {
        let rows = vec![enquiry("Asha", "111", EnquiryStatus::Pending)];
        let got = filter_enquiries(&rows, None, Some("   "));
        assert_eq!(got.len(), 1);
    }

    #[test]
    fn combined_filters_intersect() {
        let rows = vec![
            enquiry("Asha", "111", EnquiryStatus::Pending),
            enquiry("Asha", "222", EnquiryStatus::Converted),
        ];
        let got = filter_enquiries(&rows, Some(EnquiryStatus::Converted), Some("asha"));
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].contact, "222");
    }

    #[test]
    fn csv_has_header_and_unpadded_dates() {
        let rows = vec![enquiry("Asha", "9847000001", EnquiryStatus::Pending)];
        let csv = enquiries_to_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Status,Customer Name,Contact,Type,Destination,Message"
        );
        assert_eq!(
            lines.next().unwrap(),
            "5/3/2025,PENDING,Asha,9847000001,CUSTOM,Munnar,Looking for a quote"
        );
    }

    #[test]
    fn csv_quotes_fields_with_commas_and_doubles_quotes() {
        let mut row = enquiry("Menon, Asha", "111", EnquiryStatus::Pending);
        row.message = "said \"maybe\"".to_string();
        let csv = enquiries_to_csv(&[row]);
        let data_line = csv.lines().nth(1).unwrap();
        assert!(data_line.contains("\"Menon, Asha\""));
        assert!(data_line.contains("\"said \"\"maybe\"\"\""));
    }

    #[test]
    fn csv_collapses_message_newlines() {
        let mut row = enquiry("Asha", "111", EnquiryStatus::Pending);
        row.message = "line one\nline two\r\nline three".to_string();
        let csv = enquiries_to_csv(&[row]);
        let data_line = csv.lines().nth(1).unwrap();
        assert!(data_line.ends_with("line one line two line three"));
    }

    #[test]
    fn missing_date_yields_empty_cell() {
        let mut row = enquiry("Asha", "111", EnquiryStatus::Pending);
        row.created_at = None;
        let csv = enquiries_to_csv(&[row]);
        let data_line = csv.lines().nth(1).unwrap();
        assert!(data_line.starts_with(",PENDING,"));
    }
}
