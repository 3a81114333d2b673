use super::*;
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn decodes_numbers_strings_and_nulls() {
    let records = decode_invoice_list(json!([
        {
            "id": 7,
            "userId": 1,
            "invoiceDate": "2024-01-05",
            "metalType": "GOLD24",
            "amountWithoutGst": 1000,
            "gstAmount": "30.50",
            "totalAmount": null
        }
    ]));

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id.as_deref(), Some("7"));
    assert_eq!(record.user_id.as_deref(), Some("1"));
    assert_eq!(record.amount_without_gst, Some(dec!(1000)));
    assert_eq!(record.gst_amount, Some(dec!(30.50)));
    assert_eq!(record.total_amount, None);
}

#[test]
fn extreme_json_numbers_decode_without_failing() {
    let records = decode_invoice_list(json!([
        {
            "id": 1,
            "amountWithoutGst": 1e300,
            "gstAmount": 1e-300,
            "totalAmount": 250
        }
    ]));

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.amount_without_gst, None);
    assert_eq!(record.gst_amount, Some(rust_decimal::Decimal::ZERO));
    assert_eq!(record.total_amount, Some(dec!(250)));
}

#[test]
fn malformed_fields_become_absent() {
    let records = decode_invoice_list(json!([
        {
            "id": "a-1",
            "invoiceDate": 20240105,
            "metalType": "",
            "amountWithoutGst": "twelve",
            "gstAmount": {"value": 3},
            "totalAmount": true
        }
    ]));

    let record = &records[0];
    assert_eq!(record.invoice_date, None);
    assert_eq!(record.metal_label(), None);
    assert_eq!(record.amount_without_gst, None);
    assert_eq!(record.gst_amount, None);
    assert_eq!(record.total_amount, None);
    assert_eq!(record.metal(), MetalKind::Unknown);
}

#[test]
fn non_array_payload_is_empty() {
    assert!(decode_invoice_list(json!({"error": "nope"})).is_empty());
    assert!(decode_invoice_list(json!("text")).is_empty());
    assert!(decode_invoice_list(serde_json::Value::Null).is_empty());
}

#[test]
fn non_object_entries_are_skipped() {
    let records = decode_invoice_list(json!([1, "x", null, {"id": "ok"}]));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id.as_deref(), Some("ok"));
}

#[test]
fn unparseable_dates_are_treated_as_missing() {
    let record = InvoiceRecord {
        invoice_date: Some("05/01/2024".to_string()),
        ..Default::default()
    };
    assert!(record.parsed_date().is_none());
}

#[test]
fn metal_prefix_normalization_is_case_insensitive() {
    assert_eq!(MetalKind::from_label(Some("gold24")), MetalKind::Gold);
    assert_eq!(MetalKind::from_label(Some("Silver999")), MetalKind::Silver);
    assert_eq!(
        MetalKind::from_label(Some("platinum")),
        MetalKind::Other("PLATINUM".to_string())
    );
    assert_eq!(MetalKind::from_label(None), MetalKind::Unknown);
    assert_eq!(MetalKind::from_label(Some("platinum")).label(), "PLATINUM");
    assert_eq!(MetalKind::Unknown.label(), "UNKNOWN");
}

#[test]
fn manual_form_derives_rounded_total() {
    let form = ManualInvoiceForm {
        user_id: Some("3".to_string()),
        invoice_date: "2024-02-10".to_string(),
        metal_type: "GOLD24".to_string(),
        amount_without_gst: "125000".to_string(),
        gst_amount: "3750.005".to_string(),
    };

    let payload = form.to_payload();
    assert_eq!(payload.total_amount, Some(dec!(128750.01)));
    assert_eq!(payload.metal_type.as_deref(), Some("GOLD24"));
    assert_eq!(payload.user_id.as_deref(), Some("3"));
}

#[test]
fn manual_form_sends_empty_fields_as_null() {
    let form = ManualInvoiceForm {
        amount_without_gst: "500".to_string(),
        ..Default::default()
    };

    let payload = form.to_payload();
    assert_eq!(payload.invoice_date, None);
    assert_eq!(payload.metal_type, None);
    assert_eq!(payload.gst_amount, None);
    assert_eq!(payload.total_amount, None);
    assert_eq!(payload.amount_without_gst, Some(dec!(500)));

    let body = serde_json::to_value(&payload).unwrap();
    assert!(body["invoiceDate"].is_null());
    assert!(body["totalAmount"].is_null());
}
