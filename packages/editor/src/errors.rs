//! Error types for the editor

use ahap_parser::DocumentId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Parse error: {0}")]
    Parse(#[from] ahap_parser::ParseError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Document content is not valid AHAP")]
    NoStructuredContent,

    #[error("Event index {index} out of range (len {len})")]
    EventIndexOutOfRange { index: usize, len: usize },

    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LibraryError {
    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    #[error("No active document")]
    NoActiveDocument,

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),
}

/// Failure reported by a [`crate::HapticPlayer`]
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct PlaybackError(pub String);

/// Failure reported by a [`crate::PatternFetcher`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data received")]
    InvalidData,
}
