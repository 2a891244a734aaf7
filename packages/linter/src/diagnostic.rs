use ahap_parser::EventId;
use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

/// What a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Target {
    /// The document as a whole
    Document,
    /// A parsed event, by position in time order
    Event { index: usize, id: EventId },
    /// A raw entry of the source `Pattern` array
    Entry { index: usize },
}

/// A diagnostic message from the linter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level
    pub level: DiagnosticLevel,

    /// The rule that generated this diagnostic
    pub rule: String,

    /// Human-readable message
    pub message: String,

    pub target: Target,

    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn error(rule: impl Into<String>, message: impl Into<String>, target: Target) -> Self {
        Self::new(DiagnosticLevel::Error, rule, message, target)
    }

    pub fn warning(rule: impl Into<String>, message: impl Into<String>, target: Target) -> Self {
        Self::new(DiagnosticLevel::Warning, rule, message, target)
    }

    pub fn info(rule: impl Into<String>, message: impl Into<String>, target: Target) -> Self {
        Self::new(DiagnosticLevel::Info, rule, message, target)
    }

    fn new(
        level: DiagnosticLevel,
        rule: impl Into<String>,
        message: impl Into<String>,
        target: Target,
    ) -> Self {
        Self {
            level,
            rule: rule.into(),
            message: message.into(),
            target,
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }
}
