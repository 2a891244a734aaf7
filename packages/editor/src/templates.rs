use ahap_parser::{HapticEvent, Pattern};

/// A named, ready-made set of transient events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    /// `(time, intensity, sharpness)` per transient event
    events: &'static [(f64, f64, f64)],
}

static TEMPLATES: [Template; 5] = [
    Template {
        name: "Single Tap",
        description: "A simple tap sensation",
        events: &[(0.0, 0.8, 0.5)],
    },
    Template {
        name: "Double Tap",
        description: "Two quick taps in succession",
        events: &[(0.0, 0.8, 0.5), (0.2, 0.8, 0.5)],
    },
    Template {
        name: "Success Feedback",
        description: "Positive confirmation sensation",
        events: &[(0.0, 0.5, 0.3), (0.1, 0.8, 0.7)],
    },
    Template {
        name: "Error Feedback",
        description: "Negative feedback sensation",
        events: &[(0.0, 0.7, 0.8), (0.15, 0.7, 0.8), (0.3, 0.9, 0.8)],
    },
    Template {
        name: "Heartbeat",
        description: "Rhythmic heartbeat sensation",
        events: &[(0.0, 0.7, 0.3), (0.15, 0.5, 0.3), (0.8, 0.7, 0.3), (0.95, 0.5, 0.3)],
    },
];

impl Template {
    /// Fresh events (new identities on every call)
    pub fn events(&self) -> Vec<HapticEvent> {
        self.events
            .iter()
            .map(|&(time, intensity, sharpness)| HapticEvent::transient(time, intensity, sharpness))
            .collect()
    }

    pub fn to_pattern(&self) -> Pattern {
        Pattern::new(self.name)
            .with_description(self.description)
            .with_events(self.events())
    }

    /// Kebab-case key, e.g. `double-tap`
    pub fn key(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }
}

/// All built-in templates
pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

/// Look up a template by display name or kebab-case key, ignoring case
pub fn find_template(name: &str) -> Option<&'static Template> {
    let wanted = name.trim().to_lowercase().replace(' ', "-");
    TEMPLATES.iter().find(|t| t.key() == wanted)
}
