//! # AHAP Parser
//!
//! Document model and round-trip codec for Apple Haptic and Audio Pattern
//! files.
//!
//! ```text
//! AHAP text ──parse──▶ Pattern { metadata, events } ──generate──▶ AHAP text
//!     │
//!     └──extract_metadata──▶ Metadata { version, description, duration }
//! ```

pub mod ast;
pub mod error;
pub mod id_generator;
pub mod metadata;
pub mod parser;
pub mod serializer;


pub use ast::{EventKind, HapticEvent, Pattern, Version, CONTINUOUS_TAG, TRANSIENT_TAG};
pub use error::{ParseError, ParseResult};
pub use id_generator::{DocumentId, EventId};
pub use metadata::{extract_metadata, extract_metadata_from_value, Metadata, DURATION_TAIL};
pub use parser::{parse, parse_value, parse_with_report, ParseOutput, Parser, SkipReason, SkippedEntry};
pub use serializer::{
    format_json, format_json_with_indent, generate, generate_empty, Serializer, AHAP_VERSION,
    DEFAULT_PROJECT,
};
