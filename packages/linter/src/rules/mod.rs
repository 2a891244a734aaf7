mod empty_pattern;
mod negative_time;
mod non_finite_value;
mod parameter_range;
mod unknown_event_type;

pub use empty_pattern::EmptyPatternRule;
pub use negative_time::NegativeTimeRule;
pub use non_finite_value::NonFiniteValueRule;
pub use parameter_range::ParameterRangeRule;
pub use unknown_event_type::UnknownEventTypeRule;

use crate::diagnostic::Diagnostic;
use ahap_parser::{HapticEvent, Pattern};

/// Trait for implementing lint rules
pub trait LintRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check the pattern as a whole
    fn check_pattern(&self, _pattern: &Pattern) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Check a single event; `index` is its position in time order
    fn check_event(&self, _index: usize, _event: &HapticEvent) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Registry of all available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(NonFiniteValueRule),
                Box::new(NegativeTimeRule),
                Box::new(ParameterRangeRule),
                Box::new(UnknownEventTypeRule),
                Box::new(EmptyPatternRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
