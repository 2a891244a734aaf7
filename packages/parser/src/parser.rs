//! Schema-tolerant AHAP parser
//!
//! Only malformed JSON fails a parse. Everything else degrades:
//!
//! | Field                         | Rule                                  |
//! |-------------------------------|---------------------------------------|
//! | `Pattern`                     | optional, absent means no events      |
//! | `Pattern[i].Event.Time`       | required number, else entry skipped   |
//! | `Pattern[i].Event.EventType`  | required string, else entry skipped   |
//! | `HapticIntensity` parameter   | optional number, defaults to 0        |
//! | `HapticSharpness` parameter   | optional number, defaults to 0        |
//! | `Version`, `Metadata.*`       | optional, wrong types ignored         |

use crate::ast::{HapticEvent, Pattern, Version};
use crate::error::ParseResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

pub const INTENSITY_PARAMETER: &str = "HapticIntensity";
pub const SHARPNESS_PARAMETER: &str = "HapticSharpness";

/// Why a pattern entry was left out of the event list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Entry is not a JSON object
    NotAnObject,
    /// Entry has no `Event` object (e.g. a parameter curve)
    MissingEvent,
    /// `Time` is absent or not a number
    MissingTime,
    /// `EventType` is absent or not a string
    MissingEventType,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NotAnObject => "entry is not an object",
            SkipReason::MissingEvent => "entry has no Event object",
            SkipReason::MissingTime => "event has no numeric Time",
            SkipReason::MissingEventType => "event has no EventType",
        };
        f.write_str(text)
    }
}

/// A pattern entry dropped during parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    /// Position in the source `Pattern` array
    pub index: usize,
    pub reason: SkipReason,
}

/// Parsed pattern together with the entries that were dropped
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub pattern: Pattern,
    pub skipped: Vec<SkippedEntry>,
}

/// Walks a JSON tree and extracts a [`Pattern`]
pub struct Parser {
    skipped: Vec<SkippedEntry>,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            skipped: Vec::new(),
        }
    }

    /// Parse a JSON value into a pattern, consuming the parser
    pub fn parse(mut self, root: &Value) -> ParseOutput {
        let empty = Map::new();
        let object = root.as_object().unwrap_or(&empty);

        let mut pattern = Pattern {
            version: parse_version(object.get("Version")),
            ..Pattern::default()
        };

        if let Some(metadata) = object.get("Metadata").and_then(Value::as_object) {
            pattern.project = string_field(metadata, "Project");
            pattern.created = string_field(metadata, "Created");
            pattern.description = string_field(metadata, "Description");
        }
        if pattern.description.is_none() {
            pattern.description = string_field(object, "Description");
        }

        if let Some(entries) = object.get("Pattern").and_then(Value::as_array) {
            pattern.events = entries
                .iter()
                .enumerate()
                .filter_map(|(index, entry)| self.parse_entry(index, entry))
                .collect();
        }

        pattern.sort_events();

        ParseOutput {
            pattern,
            skipped: self.skipped,
        }
    }

    fn parse_entry(&mut self, index: usize, entry: &Value) -> Option<HapticEvent> {
        match read_event(entry) {
            Ok(event) => Some(event),
            Err(reason) => {
                debug!(index, reason = %reason, "Skipping pattern entry");
                self.skipped.push(SkippedEntry { index, reason });
                None
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn read_event(entry: &Value) -> Result<HapticEvent, SkipReason> {
    let entry = entry.as_object().ok_or(SkipReason::NotAnObject)?;
    let event = entry
        .get("Event")
        .and_then(Value::as_object)
        .ok_or(SkipReason::MissingEvent)?;

    let time = event
        .get("Time")
        .and_then(Value::as_f64)
        .ok_or(SkipReason::MissingTime)?;
    let event_type = event
        .get("EventType")
        .and_then(Value::as_str)
        .ok_or(SkipReason::MissingEventType)?;

    let (intensity, sharpness) = read_parameters(event.get("EventParameters"));

    Ok(HapticEvent::with_tag(time, event_type, intensity, sharpness))
}

/// Scan the parameter list; later duplicates override earlier ones
fn read_parameters(parameters: Option<&Value>) -> (f64, f64) {
    let mut intensity = 0.0;
    let mut sharpness = 0.0;

    let Some(parameters) = parameters.and_then(Value::as_array) else {
        return (intensity, sharpness);
    };

    for parameter in parameters.iter().filter_map(Value::as_object) {
        let id = parameter.get("ParameterID").and_then(Value::as_str);
        let value = parameter.get("ParameterValue").and_then(Value::as_f64);

        match (id, value) {
            (Some(INTENSITY_PARAMETER), Some(v)) => intensity = v,
            (Some(SHARPNESS_PARAMETER), Some(v)) => sharpness = v,
            _ => {}
        }
    }

    (intensity, sharpness)
}

fn parse_version(value: Option<&Value>) -> Option<Version> {
    match value? {
        Value::Number(n) => n.as_f64().map(Version::Number),
        Value::String(s) => Some(Version::Text(s.clone())),
        _ => None,
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Parse AHAP text into a pattern
pub fn parse(text: &str) -> ParseResult<Pattern> {
    parse_with_report(text).map(|output| output.pattern)
}

/// Parse AHAP text, also reporting every skipped entry
pub fn parse_with_report(text: &str) -> ParseResult<ParseOutput> {
    let root: Value = serde_json::from_str(text)?;
    Ok(parse_value(&root))
}

/// Parse an already-decoded JSON tree
pub fn parse_value(root: &Value) -> ParseOutput {
    Parser::new().parse(root)
}
