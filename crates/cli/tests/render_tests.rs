//! Integration tests for batch decoding and output rendering.

use assert_matches::assert_matches;
use chrono::{FixedOffset, TimeZone, Utc};
use notifi_history_cli::input::{parse_records, InputError};
use notifi_history_cli::output::write_records;
use notifi_history_core::clock::FixedClock;
use notifi_history_core::i18n::Catalog;
use notifi_history_core::{EventDetail, HistoryPresenter};

const NDJSON: &str = r#"
{"id": "1", "createdDate": "2024-03-10T15:30:00Z", "detail": {"__typename": "BroadcastMessageEventDetails", "subject": "Upgrade complete", "message": "Validator upgraded to v20"}}

{"id": "2", "createdDate": "2024-03-09T17:30:00Z", "detail": {"__typename": "GenericEventDetails", "sourceName": "Osmosis", "notificationTypeName": "Price Alert"}}
{"id": "3", "createdDate": "2024-03-04T08:00:00Z", "detail": {"__typename": "SwapEventDetails"}}
"#;

fn presenter() -> HistoryPresenter<FixedClock, Catalog> {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap();
    HistoryPresenter::new(FixedClock(now), Catalog::english())
}

fn render(input: &str, presenter: &HistoryPresenter<FixedClock, Catalog>) -> Vec<serde_json::Value> {
    let records = parse_records(input).unwrap();
    let mut out = Vec::new();
    let written = write_records(&mut out, &records, presenter).unwrap();
    assert_eq!(written, records.len());

    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Test: decoding
// ---------------------------------------------------------------------------

#[test]
fn ndjson_skips_blank_lines() {
    let records = parse_records(NDJSON).unwrap();
    assert_eq!(records.len(), 3);
    assert_matches!(records[2].detail, Some(EventDetail::Unsupported { .. }));
}

#[test]
fn json_array_is_accepted() {
    let records = parse_records(
        r#"  [
            {"id": "a", "createdDate": "2024-03-10T15:30:00Z"},
            {"id": "b", "createdDate": "2024-03-10T15:31:00Z", "detail": null}
        ]"#,
    )
    .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id, "b");
}

#[test]
fn bad_line_reports_line_number() {
    let input = "{\"id\": \"a\", \"createdDate\": \"2024-03-10T15:30:00Z\"}\n\n{\"id\": \"b\"}\n";
    assert_matches!(parse_records(input), Err(InputError::Line { line: 3, .. }));
}

#[test]
fn bad_array_element_reports_index() {
    let input = r#"[{"id": "a", "createdDate": "2024-03-10T15:30:00Z"}, {"createdDate": 5}]"#;
    assert_matches!(parse_records(input), Err(InputError::Element { index: 1, .. }));
}

#[test]
fn malformed_array_is_a_batch_error() {
    assert_matches!(parse_records("[{"), Err(InputError::Batch(_)));
}

// ---------------------------------------------------------------------------
// Test: output
// ---------------------------------------------------------------------------

#[test]
fn renders_one_line_per_record() {
    let lines = render(NDJSON, &presenter());

    assert_eq!(
        lines[0],
        serde_json::json!({
            "id": "1",
            "title": "Upgrade complete",
            "timestamp": "3:30 PM",
            "message": "Validator upgraded to v20",
        })
    );
    assert_eq!(lines[1]["title"], "Osmosis");
    assert_eq!(lines[1]["message"], "Price Alert");
    assert_eq!(lines[1]["timestamp"], "Yesterday");
    assert_eq!(lines[2]["title"], "Unsupported notification");
    assert_eq!(lines[2]["timestamp"], "March 4");
}

#[test]
fn offset_applies_to_rendered_clock_times() {
    let presenter = presenter().with_offset(FixedOffset::east_opt(3600).unwrap());
    let lines = render(NDJSON, &presenter);
    assert_eq!(lines[0]["timestamp"], "4:30 PM");
    assert_eq!(lines[1]["timestamp"], "Yesterday");
}

#[test]
fn empty_input_writes_nothing() {
    assert!(render("\n\n", &presenter()).is_empty());
}
