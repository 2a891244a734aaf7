//! # AHAP Editor
//!
//! Document lifecycle and library management for AHAP patterns.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ parser: AHAP text ⇄ Pattern, Metadata       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Raw text and structured view kept in sync│
//! │  - Event edits that preserve identity       │
//! │  - Library with a single active document    │
//! │  - Draft composer and templates             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ collaborators: PatternFetcher, HapticPlayer │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use ahap_editor::{Document, Library};
//! use ahap_parser::HapticEvent;
//!
//! let mut library = Library::new();
//! let index = library.add(Document::untitled(r#"{"Pattern": []}"#));
//!
//! library
//!     .apply(index, &ahap_editor::Mutation::AddEvent {
//!         event: HapticEvent::transient(0.0, 0.8, 0.5),
//!     })
//!     .unwrap();
//!
//! assert_eq!(library.active().unwrap().events().len(), 1);
//! ```

mod collaborators;
mod document;
mod draft;
mod errors;
mod library;
mod mutations;
mod shared;
mod templates;

pub use collaborators::{HapticPlayer, PatternFetcher, RecordingPlayer};
pub use document::{name_from_url, Document, DEFAULT_DOCUMENT_NAME};
pub use draft::{Draft, DEFAULT_DRAFT_NAME, EVENT_SPACING};
pub use errors::{EditorError, FetchError, LibraryError, PlaybackError};
pub use library::{Library, LibraryEvent};
pub use mutations::{Mutation, MutationError};
pub use shared::SharedLibrary;
pub use templates::{find_template, templates, Template};

// Re-export common types for convenience
pub use ahap_parser::{DocumentId, EventId, HapticEvent, Metadata, Pattern};
