use crate::id_generator::EventId;
use crate::metadata::DURATION_TAIL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire tag for an instantaneous haptic pulse
pub const TRANSIENT_TAG: &str = "HapticTransient";

/// Wire tag for a sustained haptic vibration
pub const CONTINUOUS_TAG: &str = "HapticContinuous";

/// The closed vocabulary of event types understood by consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Transient,
    Continuous,
}

impl EventKind {
    pub fn as_tag(&self) -> &'static str {
        match self {
            EventKind::Transient => TRANSIENT_TAG,
            EventKind::Continuous => CONTINUOUS_TAG,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            TRANSIENT_TAG => Some(EventKind::Transient),
            CONTINUOUS_TAG => Some(EventKind::Continuous),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A single timed haptic event
///
/// `event_type` keeps the raw tag from the source so unknown tags survive a
/// round trip; use [`HapticEvent::kind`] for the typed view. Intensity and
/// sharpness are not clamped here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HapticEvent {
    pub id: EventId,
    pub time: f64,
    pub event_type: String,
    pub intensity: f64,
    pub sharpness: f64,
}

impl HapticEvent {
    pub fn new(time: f64, kind: EventKind, intensity: f64, sharpness: f64) -> Self {
        Self::with_tag(time, kind.as_tag(), intensity, sharpness)
    }

    /// Create an event with an arbitrary type tag
    pub fn with_tag(
        time: f64,
        event_type: impl Into<String>,
        intensity: f64,
        sharpness: f64,
    ) -> Self {
        Self {
            id: EventId::new(),
            time,
            event_type: event_type.into(),
            intensity,
            sharpness,
        }
    }

    pub fn transient(time: f64, intensity: f64, sharpness: f64) -> Self {
        Self::new(time, EventKind::Transient, intensity, sharpness)
    }

    pub fn continuous(time: f64, intensity: f64, sharpness: f64) -> Self {
        Self::new(time, EventKind::Continuous, intensity, sharpness)
    }

    /// Replace the identity (used when an edit must keep an existing ID)
    pub fn with_id(mut self, id: EventId) -> Self {
        self.id = id;
        self
    }

    /// Typed event kind, `None` for tags outside the known vocabulary
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_tag(&self.event_type)
    }

    /// Compare field values within `tolerance`, ignoring identity
    pub fn approx_eq(&self, other: &HapticEvent, tolerance: f64) -> bool {
        self.event_type == other.event_type
            && (self.time - other.time).abs() <= tolerance
            && (self.intensity - other.intensity).abs() <= tolerance
            && (self.sharpness - other.sharpness).abs() <= tolerance
    }
}

/// Version tag from the source document (numeric in practice, text tolerated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Version {
    Number(f64),
    Text(String),
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Number(n) => write!(f, "{}", n),
            Version::Text(s) => f.write_str(s),
        }
    }
}

/// Structured form of an AHAP document
///
/// Insertion order of `events` carries no meaning; the canonical order is
/// ascending `time`, ties kept in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pattern {
    pub version: Option<Version>,
    pub project: Option<String>,
    pub created: Option<String>,
    pub description: Option<String>,
    pub events: Vec<HapticEvent>,
}

impl Pattern {
    /// New empty pattern stamped with the current time
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            version: None,
            project: Some(project.into()),
            created: Some(now_iso8601()),
            description: None,
            events: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_events(mut self, events: Vec<HapticEvent>) -> Self {
        self.events = events;
        self
    }

    /// Stable sort of `events` by ascending time
    pub fn sort_events(&mut self) {
        self.events.sort_by(|a, b| a.time.total_cmp(&b.time));
    }

    /// Events in canonical order, without reordering `self`
    pub fn sorted_events(&self) -> Vec<&HapticEvent> {
        let mut events: Vec<&HapticEvent> = self.events.iter().collect();
        events.sort_by(|a, b| a.time.total_cmp(&b.time));
        events
    }

    pub fn find_event(&self, id: EventId) -> Option<&HapticEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn find_event_mut(&mut self, id: EventId) -> Option<&mut HapticEvent> {
        self.events.iter_mut().find(|e| e.id == id)
    }

    /// Latest event onset plus the decay tail
    pub fn duration(&self) -> f64 {
        let max_time = self.events.iter().fold(0.0_f64, |acc, e| acc.max(e.time));
        max_time + DURATION_TAIL
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// ISO-8601 UTC timestamp with second precision, e.g. `2025-03-20T10:15:00Z`
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
