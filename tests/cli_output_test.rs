use waybill::classify_tracking_code;
use waybill::io::output::{JsonWriter, OutputWriter, TerminalWriter};
use waybill::registry::all_carriers;

#[test]
fn json_writer_emits_flat_classification_fields() {
    let package = classify_tracking_code("1Z999AA10123456784");
    let mut buffer = Vec::new();
    JsonWriter::new(&mut buffer).write_package(&package, false).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert_eq!(value["original_input"], "1Z999AA10123456784");
    assert_eq!(value["canonical_code"], "1Z999AA10123456784");
    assert_eq!(value["effective_code"], "1Z999AA10123456784");
    assert_eq!(value["carrier_code"], "ups");
    assert_eq!(value["carrier_name"], "UPS");
    assert_eq!(value["provider_code"], "ups");
    assert_eq!(value["provider_name"], "UPS");
}

#[test]
fn json_writer_marks_unclassified_fields_null() {
    let package = classify_tracking_code("no such code");
    let mut buffer = Vec::new();
    JsonWriter::new(&mut buffer).write_package(&package, false).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    assert!(value["carrier_code"].is_null());
    assert!(value["carrier_name"].is_null());
    assert!(value["provider_code"].is_null());
    assert_eq!(value["effective_code"], "nosuchcode");
}

#[test]
fn json_writer_lists_all_carriers() {
    let mut buffer = Vec::new();
    JsonWriter::new(&mut buffer)
        .write_carriers(all_carriers())
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 9);
    assert_eq!(entries[0]["code"], "dhl");
    assert_eq!(entries[0]["name"], "DHL");
    assert_eq!(entries[8]["code"], "canadapost");
}

#[test]
fn terminal_writer_reports_carrier_and_code() {
    let package = classify_tracking_code("LT12345678");
    let mut buffer = Vec::new();
    TerminalWriter::new(&mut buffer)
        .write_package(&package, false)
        .unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("LASERSHIP"));
    assert!(text.contains("LT12345678"));
}

#[test]
fn terminal_writer_flags_unknown_codes() {
    let package = classify_tracking_code("zzz");
    let mut buffer = Vec::new();
    TerminalWriter::new(&mut buffer)
        .write_package(&package, false)
        .unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("unknown"));
}

#[test]
fn terminal_writer_original_flag_reports_input_verbatim() {
    let package = classify_tracking_code("1Z 999 AA1 01 2345 678 4");
    let mut buffer = Vec::new();
    TerminalWriter::new(&mut buffer)
        .write_package(&package, true)
        .unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("Tracking code:"));
    assert!(text.contains("1Z 999 AA1 01 2345 678 4"));
    // The effective code only appears inside the original in spaced form,
    // so its contiguous rendition must be absent.
    assert!(!text.contains("1Z999AA10123456784"));
}

#[test]
fn terminal_writer_shows_original_when_it_differs() {
    let package = classify_tracking_code("1Z 999 AA1 01 2345 678 4");
    let mut buffer = Vec::new();
    TerminalWriter::new(&mut buffer)
        .write_package(&package, false)
        .unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("1Z999AA10123456784"));
    assert!(text.contains("1Z 999 AA1 01 2345 678 4"));
}
