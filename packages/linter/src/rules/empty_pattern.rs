use crate::diagnostic::{Diagnostic, Target};
use crate::rules::LintRule;
use ahap_parser::Pattern;

/// A pattern with no events plays nothing
pub struct EmptyPatternRule;

impl LintRule for EmptyPatternRule {
    fn name(&self) -> &'static str {
        "empty-pattern"
    }

    fn description(&self) -> &'static str {
        "Note patterns without any events"
    }

    fn check_pattern(&self, pattern: &Pattern) -> Vec<Diagnostic> {
        if pattern.is_empty() {
            vec![Diagnostic::info(self.name(), "Pattern has no events", Target::Document)]
        } else {
            Vec::new()
        }
    }
}
