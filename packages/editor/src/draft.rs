//! # Draft Composer
//!
//! Working state for building a new pattern event by event before it is
//! saved into a [`Library`].
//!
//! Events are kept in insertion order so indices stay stable while editing;
//! generation sorts them by time.

use crate::collaborators::HapticPlayer;
use crate::templates::Template;
use crate::{Document, EditorError, Library};
use ahap_parser::{generate, HapticEvent, Pattern};

pub const DEFAULT_DRAFT_NAME: &str = "New Pattern";

/// Gap between the latest event and one added with [`Draft::add_event`]
pub const EVENT_SPACING: f64 = 0.2;

const NEW_EVENT_INTENSITY: f64 = 0.6;
const NEW_EVENT_SHARPNESS: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Draft {
    pub name: String,
    pub description: String,
    events: Vec<HapticEvent>,
    selected: Option<usize>,
}

impl Draft {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_DRAFT_NAME.to_string(),
            description: String::new(),
            events: Vec::new(),
            selected: None,
        }
    }

    pub fn events(&self) -> &[HapticEvent] {
        &self.events
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_event(&self) -> Option<&HapticEvent> {
        self.selected.and_then(|i| self.events.get(i))
    }

    /// Append a transient after the latest event and select it
    pub fn add_event(&mut self) -> usize {
        let time = self
            .events
            .iter()
            .map(|e| e.time)
            .reduce(f64::max)
            .map_or(0.0, |latest| latest + EVENT_SPACING);

        self.events.push(HapticEvent::transient(
            time,
            NEW_EVENT_INTENSITY,
            NEW_EVENT_SHARPNESS,
        ));

        let index = self.events.len() - 1;
        self.selected = Some(index);
        index
    }

    /// Replace the event at `index`, keeping the existing identity
    pub fn update_event(&mut self, index: usize, event: HapticEvent) -> Result<(), EditorError> {
        let len = self.events.len();
        let slot = self
            .events
            .get_mut(index)
            .ok_or(EditorError::EventIndexOutOfRange { index, len })?;

        *slot = event.with_id(slot.id);
        Ok(())
    }

    /// Remove the event at `index` and clear the selection
    pub fn remove_event(&mut self, index: usize) -> Result<HapticEvent, EditorError> {
        self.check_index(index)?;

        let removed = self.events.remove(index);
        self.selected = None;
        Ok(removed)
    }

    pub fn select(&mut self, index: usize) -> Result<(), EditorError> {
        self.check_index(index)?;

        self.selected = Some(index);
        Ok(())
    }

    /// Replace name, description and events with a template's
    pub fn load_template(&mut self, template: &Template) {
        self.name = template.name.to_string();
        self.description = template.description.to_string();
        self.events = template.events();
        self.selected = None;
    }

    pub fn to_pattern(&self) -> Pattern {
        Pattern::new(self.name.clone())
            .with_description(self.description.clone())
            .with_events(self.events.clone())
    }

    pub fn to_ahap(&self) -> String {
        generate(&self.to_pattern())
    }

    /// Play the draft without saving it
    pub fn play(&self, player: &mut dyn HapticPlayer) -> Result<(), EditorError> {
        player.play(&self.to_ahap())?;
        Ok(())
    }

    /// Add the draft to `library` as a new document, then reset the draft
    pub fn save_into(&mut self, library: &mut Library) -> usize {
        let document = Document::new(self.name.clone(), self.to_ahap());
        let index = library.add(document);
        self.reset();
        index
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn check_index(&self, index: usize) -> Result<(), EditorError> {
        if index < self.events.len() {
            Ok(())
        } else {
            Err(EditorError::EventIndexOutOfRange {
                index,
                len: self.events.len(),
            })
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::find_template;

    #[test]
    fn test_add_event_spacing() {
        let mut draft = Draft::new();

        assert_eq!(draft.add_event(), 0);
        assert_eq!(draft.events()[0].time, 0.0);
        assert_eq!(draft.events()[0].intensity, 0.6);
        assert_eq!(draft.events()[0].sharpness, 0.5);

        assert_eq!(draft.add_event(), 1);
        assert!((draft.events()[1].time - 0.2).abs() < 1e-9);
        assert_eq!(draft.selected(), Some(1));
    }

    #[test]
    fn test_add_after_latest_not_last() {
        let mut draft = Draft::new();
        draft.add_event();
        draft
            .update_event(0, HapticEvent::transient(1.0, 0.6, 0.5))
            .unwrap();
        draft.add_event();
        draft
            .update_event(1, HapticEvent::transient(0.1, 0.6, 0.5))
            .unwrap();

        draft.add_event();
        assert!((draft.events()[2].time - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_update_keeps_identity() {
        let mut draft = Draft::new();
        draft.add_event();
        let id = draft.events()[0].id;

        draft
            .update_event(0, HapticEvent::continuous(0.5, 1.0, 0.0))
            .unwrap();

        assert_eq!(draft.events()[0].id, id);
        assert_eq!(draft.events()[0].time, 0.5);
        assert_eq!(
            draft.update_event(4, HapticEvent::transient(0.0, 0.0, 0.0)),
            Err(EditorError::EventIndexOutOfRange { index: 4, len: 1 })
        );
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut draft = Draft::new();
        draft.add_event();
        draft.add_event();

        draft.remove_event(0).unwrap();

        assert_eq!(draft.events().len(), 1);
        assert_eq!(draft.selected(), None);
    }

    #[test]
    fn test_load_template() {
        let mut draft = Draft::new();
        draft.load_template(find_template("success feedback").unwrap());

        assert_eq!(draft.name, "Success Feedback");
        assert_eq!(draft.description, "Positive confirmation sensation");
        assert_eq!(draft.events().len(), 2);
    }

    #[test]
    fn test_save_into_library_resets() {
        let mut library = Library::new();
        let mut draft = Draft::new();
        draft.name = "Buzz".to_string();
        draft.add_event();
        draft.add_event();

        let index = draft.save_into(&mut library);

        let saved = library.get(index).unwrap();
        assert_eq!(saved.name(), "Buzz");
        assert_eq!(saved.events().len(), 2);
        assert_eq!(library.active_index(), Some(index));

        assert_eq!(draft.name, DEFAULT_DRAFT_NAME);
        assert!(draft.events().is_empty());
    }

    #[test]
    fn test_empty_draft_generates_empty_pattern() {
        let pattern = ahap_parser::parse(&Draft::new().to_ahap()).unwrap();
        assert!(pattern.events.is_empty());
        assert_eq!(pattern.project.as_deref(), Some(DEFAULT_DRAFT_NAME));
    }
}
