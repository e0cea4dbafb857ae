use super::*;

fn entry(filename: &str, weight: f64) -> HistoryEntry {
    serde_json::from_value(serde_json::json!({
        "id": "abc123",
        "filename": filename,
        "calculated_weight_kg": weight,
        "extracted_data": {"material": "steel"},
        "timestamp": "2026-01-02T03:04:05+00:00"
    }))
    .expect("history entry")
}

// =============================================================
// HistoryState
// =============================================================

#[test]
fn history_state_default_is_loading_and_empty() {
    let state = HistoryState::default();
    assert!(state.loading);
    assert!(state.entries.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn loaded_stores_entries_and_stops_loading() {
    let mut state = HistoryState::default();
    state.loaded(vec![entry("bracket.png", 1.5)]);
    assert!(!state.loading);
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].filename, "bracket.png");
}

#[test]
fn loaded_with_empty_list_is_not_an_error() {
    let mut state = HistoryState::default();
    state.loaded(Vec::new());
    assert!(!state.loading);
    assert!(state.entries.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn failed_records_the_message() {
    let mut state = HistoryState::default();
    state.failed("Failed to fetch history".to_owned());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Failed to fetch history"));
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn weight_is_formatted_to_three_decimals() {
    assert_eq!(format_weight_kg(0.0), "0.000");
    assert_eq!(format_weight_kg(2.5), "2.500");
    assert_eq!(format_weight_kg(12.3456), "12.346");
}

#[test]
fn field_values_render_numbers_with_two_decimals() {
    assert_eq!(display_field_value(&serde_json::json!(5)), "5.00");
    assert_eq!(display_field_value(&serde_json::json!(2.5)), "2.50");
}

#[test]
fn field_values_render_null_as_na() {
    assert_eq!(display_field_value(&serde_json::Value::Null), "N/A");
}

#[test]
fn field_values_render_strings_verbatim() {
    assert_eq!(display_field_value(&serde_json::json!("aluminium")), "aluminium");
}

#[test]
fn field_values_render_bools() {
    assert_eq!(display_field_value(&serde_json::json!(false)), "false");
}

#[test]
fn timestamps_render_date_and_minutes() {
    assert_eq!(
        format_timestamp("2026-01-02T03:04:05+00:00"),
        "2026-01-02 03:04"
    );
    assert_eq!(
        format_timestamp("2026-01-02T03:04:05.123456+00:00"),
        "2026-01-02 03:04"
    );
}

#[test]
fn unrecognized_timestamps_pass_through() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
}
