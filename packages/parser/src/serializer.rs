use crate::ast::{HapticEvent, Pattern};
use crate::parser::{INTENSITY_PARAMETER, SHARPNESS_PARAMETER};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::error;

/// Version marker written into every generated document
pub const AHAP_VERSION: f64 = 1.0;

/// Project name used by [`generate_empty`] callers that have none
pub const DEFAULT_PROJECT: &str = "New Haptic Pattern";

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireDocument<'a> {
    version: f64,
    metadata: WireMetadata<'a>,
    pattern: Vec<WireEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireEntry<'a> {
    event: WireEvent<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireEvent<'a> {
    time: f64,
    event_type: &'a str,
    // Intensity first, then sharpness: players rely on this order
    event_parameters: [WireParameter; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireParameter {
    #[serde(rename = "ParameterID")]
    parameter_id: &'static str,
    parameter_value: f64,
}

impl<'a> From<&'a HapticEvent> for WireEntry<'a> {
    fn from(event: &'a HapticEvent) -> Self {
        Self {
            event: WireEvent {
                time: event.time,
                event_type: &event.event_type,
                event_parameters: [
                    WireParameter {
                        parameter_id: INTENSITY_PARAMETER,
                        parameter_value: event.intensity,
                    },
                    WireParameter {
                        parameter_id: SHARPNESS_PARAMETER,
                        parameter_value: event.sharpness,
                    },
                ],
            },
        }
    }
}

/// Serializer converts a structured pattern back to AHAP text
///
/// Output is canonical: fixed version marker, metadata object, events in
/// ascending time order. Feeding the output back through the parser and
/// serializing again yields identical bytes.
pub struct Serializer {
    indent_string: String,
}

impl Serializer {
    pub fn new() -> Self {
        Self {
            indent_string: "  ".to_string(), // 2 spaces
        }
    }

    pub fn with_indent(indent: &str) -> Self {
        Self {
            indent_string: indent.to_string(),
        }
    }

    /// Serialize a pattern to pretty-printed AHAP JSON
    pub fn serialize(&self, pattern: &Pattern) -> String {
        let document = WireDocument {
            version: AHAP_VERSION,
            metadata: WireMetadata {
                project: pattern.project.as_deref(),
                created: pattern.created.as_deref(),
                description: pattern.description.as_deref(),
            },
            pattern: pattern
                .sorted_events()
                .into_iter()
                .map(WireEntry::from)
                .collect(),
        };

        self.write_pretty(&document)
    }

    /// Re-indent any JSON value, keeping key order
    pub fn serialize_value(&self, value: &Value) -> String {
        self.write_pretty(value)
    }

    fn write_pretty<T: Serialize + ?Sized>(&self, value: &T) -> String {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.indent_string.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buffer, formatter);

        if let Err(e) = value.serialize(&mut ser) {
            error!(error = %e, "Failed to serialize AHAP document");
            return String::new();
        }

        String::from_utf8(buffer).unwrap_or_default()
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate canonical AHAP text for a pattern
pub fn generate(pattern: &Pattern) -> String {
    Serializer::new().serialize(pattern)
}

/// Generate a document with no events, stamped with the current time
pub fn generate_empty(project: &str) -> String {
    generate(&Pattern::new(project).with_description(""))
}

/// Pretty-print arbitrary JSON, or return the input untouched if it is not JSON
pub fn format_json(text: &str) -> String {
    format_json_with_indent(text, "  ")
}

pub fn format_json_with_indent(text: &str, indent: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Serializer::with_indent(indent).serialize_value(&value),
        Err(_) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Version;
    use crate::parse;

    #[test]
    fn test_serialize_empty_pattern() {
        let output = generate(&Pattern::default());
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["Version"], 1.0);
        assert!(value["Metadata"].as_object().unwrap().is_empty());
        assert_eq!(value["Pattern"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_top_level_key_order() {
        let output = generate(&Pattern::new("Demo"));
        let version = output.find("\"Version\"").unwrap();
        let metadata = output.find("\"Metadata\"").unwrap();
        let pattern = output.find("\"Pattern\"").unwrap();
        assert!(version < metadata && metadata < pattern);
    }

    #[test]
    fn test_parameter_order_is_intensity_then_sharpness() {
        let pattern = Pattern::default().with_events(vec![HapticEvent::transient(0.0, 0.8, 0.3)]);
        let value: Value = serde_json::from_str(&generate(&pattern)).unwrap();

        let params = &value["Pattern"][0]["Event"]["EventParameters"];
        assert_eq!(params[0]["ParameterID"], "HapticIntensity");
        assert_eq!(params[0]["ParameterValue"], 0.8);
        assert_eq!(params[1]["ParameterID"], "HapticSharpness");
        assert_eq!(params[1]["ParameterValue"], 0.3);
    }

    #[test]
    fn test_events_written_in_time_order() {
        let pattern = Pattern::default().with_events(vec![
            HapticEvent::transient(0.4, 0.1, 0.1),
            HapticEvent::transient(0.1, 0.2, 0.2),
        ]);
        let value: Value = serde_json::from_str(&generate(&pattern)).unwrap();

        assert_eq!(value["Pattern"][0]["Event"]["Time"], 0.1);
        assert_eq!(value["Pattern"][1]["Event"]["Time"], 0.4);
    }

    #[test]
    fn test_version_marker_is_fixed() {
        let mut pattern = Pattern::default();
        pattern.version = Some(Version::Text("beta".to_string()));

        let parsed = parse(&generate(&pattern)).unwrap();
        assert_eq!(parsed.version, Some(Version::Number(AHAP_VERSION)));
    }

    #[test]
    fn test_custom_indent() {
        let output = Serializer::with_indent("    ").serialize(&Pattern::default());
        assert!(output.contains("\n    \"Version\""));
    }

    #[test]
    fn test_generate_empty() {
        let parsed = parse(&generate_empty(DEFAULT_PROJECT)).unwrap();
        assert_eq!(parsed.project.as_deref(), Some(DEFAULT_PROJECT));
        assert_eq!(parsed.description.as_deref(), Some(""));
        assert!(parsed.created.is_some());
        assert!(parsed.events.is_empty());
    }

    #[test]
    fn test_format_json_preserves_key_order() {
        let formatted = format_json(r#"{"b":1,"a":{"z":true,"y":null}}"#);
        assert_eq!(
            formatted,
            "{\n  \"b\": 1,\n  \"a\": {\n    \"z\": true,\n    \"y\": null\n  }\n}"
        );
    }

    #[test]
    fn test_format_json_leaves_invalid_input() {
        assert_eq!(format_json("not json {"), "not json {");
    }
}
