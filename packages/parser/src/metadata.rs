//! Lightweight summary of an AHAP document for listings.
//!
//! Works on the raw JSON tree and never materializes events.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Seconds added after the last event onset to cover its decay
pub const DURATION_TAIL: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Top-level `Version`, only when it is a string
    pub version: Option<String>,
    /// Top-level `Description`, only when it is a string
    pub description: Option<String>,
    /// Latest event `Time` plus [`DURATION_TAIL`]
    pub duration: f64,
}

/// Extract metadata from AHAP text
///
/// Returns `None` for empty text or text that is not JSON.
pub fn extract_metadata(text: &str) -> Option<Metadata> {
    if text.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(text) {
        Ok(root) => Some(extract_metadata_from_value(&root)),
        Err(e) => {
            warn!(error = %e, "Could not extract AHAP metadata");
            None
        }
    }
}

pub fn extract_metadata_from_value(root: &Value) -> Metadata {
    let string_field = |key: &str| root.get(key).and_then(Value::as_str).map(str::to_string);

    let max_time = root
        .get("Pattern")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("Event")?.get("Time")?.as_f64())
                .fold(0.0_f64, f64::max)
        })
        .unwrap_or(0.0);

    Metadata {
        version: string_field("Version"),
        description: string_field("Description"),
        duration: max_time + DURATION_TAIL,
    }
}
