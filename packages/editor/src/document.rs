//! # Pattern Document
//!
//! A named, timestamped AHAP document holding both the raw text and the
//! structured view derived from it.
//!
//! ## Lifecycle
//!
//! ```text
//! Create ──▶ UpdateContent / Apply / Rename ──▶ removed from Library
//!   │               │
//!   └── raw text ───┴──▶ parse + extract metadata
//! ```
//!
//! The raw text is never discarded: content that fails to parse is kept
//! as-is, with `metadata` and the structured pattern set to `None`.

use crate::collaborators::HapticPlayer;
use crate::mutations::Mutation;
use crate::EditorError;
use ahap_parser::{
    extract_metadata, generate, parse, DocumentId, EventId, HapticEvent, Metadata, Pattern,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Name used when a document is created without one
pub const DEFAULT_DOCUMENT_NAME: &str = "Untitled";

/// Editable AHAP document
#[derive(Debug, Clone)]
pub struct Document {
    id: DocumentId,
    name: String,
    raw_content: String,
    loaded_time: DateTime<Utc>,
    metadata: Option<Metadata>,

    /// Structured view, `None` when `raw_content` is not valid JSON
    pattern: Option<Pattern>,

    /// Increments on each content change
    revision: u64,
}

impl Document {
    /// Create a document, stamping it with the current time
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let mut doc = Self {
            id: DocumentId::new(),
            name: name.into(),
            raw_content: content.into(),
            loaded_time: Utc::now(),
            metadata: None,
            pattern: None,
            revision: 0,
        };
        doc.refresh();
        doc
    }

    /// Create a document with the placeholder name
    pub fn untitled(content: impl Into<String>) -> Self {
        Self::new(DEFAULT_DOCUMENT_NAME, content)
    }

    /// Create a document from a structured pattern
    pub fn from_pattern(name: impl Into<String>, pattern: &Pattern) -> Self {
        Self::new(name, generate(pattern))
    }

    /// Create a document for content downloaded from `url`
    pub fn from_download(url: &str, content: impl Into<String>) -> Self {
        Self::new(name_from_url(url), content)
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    pub fn loaded_time(&self) -> DateTime<Utc> {
        self.loaded_time
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Structured view of the content, if it parsed
    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Events in time order; empty when the content does not parse
    pub fn events(&self) -> &[HapticEvent] {
        self.pattern
            .as_ref()
            .map(|p| p.events.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_parseable(&self) -> bool {
        self.pattern.is_some()
    }

    /// Replace the raw content and recompute derived data
    ///
    /// Identity and load time are unchanged.
    pub fn update_content(&mut self, content: impl Into<String>) {
        self.raw_content = content.into();
        self.revision += 1;
        self.refresh();
    }

    /// Copy of this document with new content
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        let mut doc = self.clone();
        doc.update_content(content);
        doc
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Apply a mutation to the structured view and re-serialize
    ///
    /// Fails with [`EditorError::NoStructuredContent`] when the raw content
    /// does not parse; the document is unchanged on any error.
    pub fn apply(&mut self, mutation: &Mutation) -> Result<(), EditorError> {
        let current = self.pattern.as_ref().ok_or(EditorError::NoStructuredContent)?;

        let mut pattern = current.clone();
        mutation.apply(&mut pattern)?;

        self.raw_content = generate(&pattern);
        self.metadata = extract_metadata(&self.raw_content);
        self.pattern = Some(pattern);
        self.revision += 1;

        Ok(())
    }

    /// Add an event to the timeline
    pub fn add_event(&mut self, event: HapticEvent) -> Result<(), EditorError> {
        self.apply(&Mutation::AddEvent { event })
    }

    /// Replace an existing event, matched by its identity
    pub fn update_event(&mut self, event: &HapticEvent) -> Result<(), EditorError> {
        self.apply(&Mutation::update_from(event))
    }

    pub fn remove_event(&mut self, event_id: EventId) -> Result<(), EditorError> {
        self.apply(&Mutation::RemoveEvent { event_id })
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), EditorError> {
        self.apply(&Mutation::SetDescription {
            description: description.into(),
        })
    }

    /// Canonical AHAP text handed to a haptic player
    pub fn playback_content(&self) -> Result<String, EditorError> {
        self.pattern
            .as_ref()
            .map(generate)
            .ok_or(EditorError::NoStructuredContent)
    }

    /// Play this document through `player`
    pub fn play(&self, player: &mut dyn HapticPlayer) -> Result<(), EditorError> {
        let content = self.playback_content()?;
        player.play(&content)?;
        Ok(())
    }

    fn refresh(&mut self) {
        self.metadata = extract_metadata(&self.raw_content);
        self.pattern = match parse(&self.raw_content) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                debug!(document = %self.id, error = %e, "Document content is not structured");
                None
            }
        };
    }
}

/// Document name for a download: last path segment without `.ahap`
pub fn name_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    let name = segment.replace(".ahap", "");

    if name.is_empty() {
        DEFAULT_DOCUMENT_NAME.to_string()
    } else {
        name
    }
}
