//! Wire types shared with the backend API and the analysis workflow.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The authenticated user, as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
}

/// One recorded analysis, as returned by `GET /analysis/history`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub filename: String,
    pub calculated_weight_kg: f64,
    #[serde(default)]
    pub extracted_data: Map<String, Value>,
    pub timestamp: String,
}

/// Result of one analysis workflow run.
///
/// The workflow's response has no enforced schema, so every field is
/// optional and anything unrecognized is preserved in `extra`. Consumers go
/// through the named accessors instead of poking at raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation_details: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    /// Estimated weight in kilograms, when the workflow reported one.
    pub fn weight_kg(&self) -> Option<f64> {
        self.calculated_weight_kg
    }

    /// Extracted drawing fields (dimensions, material, ...), when present.
    pub fn extracted_fields(&self) -> Option<&Map<String, Value>> {
        self.extracted_data.as_ref()
    }

    /// Intermediate values of the weight calculation, when present.
    pub fn calculation_details(&self) -> Option<&Map<String, Value>> {
        self.calculation_details.as_ref()
    }

    /// Human-readable text for the result panel and clipboard preview:
    /// the extracted fields pretty-printed, or the whole payload when the
    /// workflow returned no `extracted_data`.
    pub fn display_text(&self) -> String {
        match &self.extracted_data {
            Some(fields) => pretty(&Value::Object(fields.clone())),
            None => self.full_text(),
        }
    }

    /// The complete payload pretty-printed, used by the copy action.
    pub fn full_text(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
