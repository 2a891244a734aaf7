//! Interfaces to the world outside the document model.
//!
//! The editor never talks to a network or a haptic engine directly; callers
//! plug in implementations of these traits.

use crate::errors::{FetchError, PlaybackError};

/// Plays a finished AHAP document on a haptic device
///
/// Receives exactly the canonical generated text of a document.
pub trait HapticPlayer {
    fn play(&mut self, ahap: &str) -> Result<(), PlaybackError>;
}

/// Retrieves raw AHAP text from a URL
///
/// Implementations own timeouts, retries and cancellation.
pub trait PatternFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Player that records everything it is asked to play
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    pub played: Vec<String>,
}

impl HapticPlayer for RecordingPlayer {
    fn play(&mut self, ahap: &str) -> Result<(), PlaybackError> {
        self.played.push(ahap.to_string());
        Ok(())
    }
}
