//! History list state and display formatting.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde_json::Value;

use crate::net::types::HistoryEntry;

/// State for the scan history page. Fetched once on mount; the list order
/// is whatever the backend returned.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryState {
    pub entries: Vec<HistoryEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl HistoryState {
    pub fn loaded(&mut self, entries: Vec<HistoryEntry>) {
        self.entries = entries;
        self.loading = false;
    }

    pub fn failed(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}

/// Compact rendering of the backend's ISO-8601 timestamp: the date plus
/// hours and minutes. Anything unrecognized passes through untouched.
pub fn format_timestamp(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, time)) => {
            let hhmm = time.get(..5).unwrap_or(time);
            format!("{date} {hhmm}")
        }
        None => timestamp.to_owned(),
    }
}

/// Weight as shown on history cards: three decimal places.
pub fn format_weight_kg(weight: f64) -> String {
    format!("{weight:.3}")
}

/// Render one extracted field value for the expanded card grid. Numbers
/// get two decimal places; nulls show as "N/A".
pub fn display_field_value(value: &Value) -> String {
    match value {
        Value::Null => "N/A".to_owned(),
        Value::Number(n) => n
            .as_f64()
            .map_or_else(|| n.to_string(), |f| format!("{f:.2}")),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
