//! # Pattern Mutations
//!
//! Semantic edits to the structured form of a pattern.
//!
//! ## Mutation Semantics
//!
//! ### AddEvent
//! - Inserts the event with its existing identity
//! - Fails if an event with the same ID is already present
//!
//! ### UpdateEvent
//! - Atomic replacement of all four fields
//! - Identity is kept, even if the event moves in time order
//!
//! ### RemoveEvent
//! - Removes exactly one event by ID
//!
//! Events are re-sorted by time after every edit.

use ahap_parser::parser::{INTENSITY_PARAMETER, SHARPNESS_PARAMETER};
use ahap_parser::{EventId, HapticEvent, Pattern};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Add a new event to the timeline
    AddEvent { event: HapticEvent },

    /// Replace the fields of an existing event
    UpdateEvent {
        event_id: EventId,
        time: f64,
        event_type: String,
        intensity: f64,
        sharpness: f64,
    },

    /// Remove an event from the timeline
    RemoveEvent { event_id: EventId },

    /// Replace the pattern description
    SetDescription { description: String },

    /// Replace the pattern project name
    SetProject { project: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Event already exists: {0}")]
    DuplicateEvent(EventId),

    #[error("Event time must be finite")]
    NonFiniteTime,

    #[error("{0} must be finite")]
    NonFiniteParameter(&'static str),
}

impl Mutation {
    /// Replacement for `event` that keeps its identity
    pub fn update_from(event: &HapticEvent) -> Self {
        Mutation::UpdateEvent {
            event_id: event.id,
            time: event.time,
            event_type: event.event_type.clone(),
            intensity: event.intensity,
            sharpness: event.sharpness,
        }
    }

    /// Apply mutation to the pattern with validation
    ///
    /// On error the pattern is left untouched.
    pub fn apply(&self, pattern: &mut Pattern) -> Result<(), MutationError> {
        self.validate(pattern)?;

        match self {
            Mutation::AddEvent { event } => {
                pattern.events.push(event.clone());
                pattern.sort_events();
            }

            Mutation::UpdateEvent {
                event_id,
                time,
                event_type,
                intensity,
                sharpness,
            } => {
                let event = pattern
                    .find_event_mut(*event_id)
                    .ok_or(MutationError::EventNotFound(*event_id))?;
                event.time = *time;
                event.event_type = event_type.clone();
                event.intensity = *intensity;
                event.sharpness = *sharpness;
                pattern.sort_events();
            }

            Mutation::RemoveEvent { event_id } => {
                pattern.events.retain(|e| e.id != *event_id);
            }

            Mutation::SetDescription { description } => {
                pattern.description = Some(description.clone());
            }

            Mutation::SetProject { project } => {
                pattern.project = Some(project.clone());
            }
        }

        Ok(())
    }

    /// Validate mutation can be applied
    pub fn validate(&self, pattern: &Pattern) -> Result<(), MutationError> {
        match self {
            Mutation::AddEvent { event } => {
                check_finite(event.time, event.intensity, event.sharpness)?;
                if pattern.find_event(event.id).is_some() {
                    return Err(MutationError::DuplicateEvent(event.id));
                }
                Ok(())
            }

            Mutation::UpdateEvent {
                event_id,
                time,
                intensity,
                sharpness,
                ..
            } => {
                check_finite(*time, *intensity, *sharpness)?;
                if pattern.find_event(*event_id).is_none() {
                    return Err(MutationError::EventNotFound(*event_id));
                }
                Ok(())
            }

            Mutation::RemoveEvent { event_id } => {
                if pattern.find_event(*event_id).is_none() {
                    return Err(MutationError::EventNotFound(*event_id));
                }
                Ok(())
            }

            Mutation::SetDescription { .. } | Mutation::SetProject { .. } => Ok(()),
        }
    }
}

/// NaN and infinities have no JSON form and would not survive generation
fn check_finite(time: f64, intensity: f64, sharpness: f64) -> Result<(), MutationError> {
    if !time.is_finite() {
        return Err(MutationError::NonFiniteTime);
    }
    if !intensity.is_finite() {
        return Err(MutationError::NonFiniteParameter(INTENSITY_PARAMETER));
    }
    if !sharpness.is_finite() {
        return Err(MutationError::NonFiniteParameter(SHARPNESS_PARAMETER));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_with(events: Vec<HapticEvent>) -> Pattern {
        Pattern::default().with_events(events)
    }

    #[test]
    fn test_add_event_sorts() {
        let mut pattern = pattern_with(vec![HapticEvent::transient(0.5, 1.0, 1.0)]);
        let early = HapticEvent::transient(0.1, 0.2, 0.2);
        let early_id = early.id;

        Mutation::AddEvent { event: early }.apply(&mut pattern).unwrap();

        assert_eq!(pattern.events.len(), 2);
        assert_eq!(pattern.events[0].id, early_id);
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let event = HapticEvent::transient(0.5, 1.0, 1.0);
        let mut pattern = pattern_with(vec![event.clone()]);

        let result = Mutation::AddEvent { event: event.clone() }.apply(&mut pattern);
        assert_eq!(result, Err(MutationError::DuplicateEvent(event.id)));
        assert_eq!(pattern.events.len(), 1);
    }

    #[test]
    fn test_update_keeps_identity_when_reordered() {
        let first = HapticEvent::transient(0.0, 0.5, 0.5);
        let second = HapticEvent::transient(0.3, 0.5, 0.5);
        let first_id = first.id;
        let mut pattern = pattern_with(vec![first, second]);

        Mutation::UpdateEvent {
            event_id: first_id,
            time: 1.0,
            event_type: "HapticContinuous".to_string(),
            intensity: 0.9,
            sharpness: 0.1,
        }
        .apply(&mut pattern)
        .unwrap();

        let moved = &pattern.events[1];
        assert_eq!(moved.id, first_id);
        assert_eq!(moved.time, 1.0);
        assert_eq!(moved.event_type, "HapticContinuous");
        assert_eq!(moved.intensity, 0.9);
    }

    #[test]
    fn test_update_missing_event() {
        let mut pattern = Pattern::default();
        let ghost = HapticEvent::transient(0.0, 0.0, 0.0);

        let result = Mutation::update_from(&ghost).apply(&mut pattern);
        assert_eq!(result, Err(MutationError::EventNotFound(ghost.id)));
    }

    #[test]
    fn test_non_finite_time_rejected() {
        let mut pattern = Pattern::default();
        let event = HapticEvent::transient(f64::NAN, 0.0, 0.0);

        let result = Mutation::AddEvent { event }.apply(&mut pattern);
        assert_eq!(result, Err(MutationError::NonFiniteTime));
        assert!(pattern.events.is_empty());
    }

    #[test]
    fn test_non_finite_parameters_rejected() {
        let mut pattern = Pattern::default();
        let event = HapticEvent::transient(0.2, f64::NAN, 0.5);

        let result = Mutation::AddEvent { event }.apply(&mut pattern);
        assert_eq!(result, Err(MutationError::NonFiniteParameter("HapticIntensity")));
        assert!(pattern.events.is_empty());

        let existing = HapticEvent::transient(0.2, 0.5, 0.5);
        let mut pattern = pattern_with(vec![existing.clone()]);
        let mut edited = existing.clone();
        edited.sharpness = f64::INFINITY;

        let result = Mutation::update_from(&edited).apply(&mut pattern);
        assert_eq!(result, Err(MutationError::NonFiniteParameter("HapticSharpness")));
        assert_eq!(pattern.events[0].sharpness, 0.5);
    }

    #[test]
    fn test_remove_event() {
        let keep = HapticEvent::transient(0.0, 0.5, 0.5);
        let drop = HapticEvent::transient(0.1, 0.5, 0.5);
        let (keep_id, drop_id) = (keep.id, drop.id);
        let mut pattern = pattern_with(vec![keep, drop]);

        Mutation::RemoveEvent { event_id: drop_id }.apply(&mut pattern).unwrap();
        assert_eq!(pattern.events.len(), 1);
        assert_eq!(pattern.events[0].id, keep_id);

        let again = Mutation::RemoveEvent { event_id: drop_id }.apply(&mut pattern);
        assert_eq!(again, Err(MutationError::EventNotFound(drop_id)));
    }

    #[test]
    fn test_set_metadata_fields() {
        let mut pattern = Pattern::default();
        Mutation::SetDescription { description: "Buzz".to_string() }
            .apply(&mut pattern)
            .unwrap();
        Mutation::SetProject { project: "Demo".to_string() }
            .apply(&mut pattern)
            .unwrap();

        assert_eq!(pattern.description.as_deref(), Some("Buzz"));
        assert_eq!(pattern.project.as_deref(), Some("Demo"));
    }
}
