use crate::diagnostic::{Diagnostic, Target};
use crate::rules::LintRule;
use ahap_parser::HapticEvent;

/// Event onsets must not precede the start of the pattern
pub struct NegativeTimeRule;

impl LintRule for NegativeTimeRule {
    fn name(&self) -> &'static str {
        "negative-time"
    }

    fn description(&self) -> &'static str {
        "Disallow events with a negative Time"
    }

    fn check_event(&self, index: usize, event: &HapticEvent) -> Vec<Diagnostic> {
        if event.time < 0.0 {
            vec![Diagnostic::error(
                self.name(),
                format!("Event {} starts at {}s, before the pattern begins", index, event.time),
                Target::Event { index, id: event.id },
            )
            .with_suggestion("Shift the event to Time 0 or later")]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_negative_time() {
        let diagnostics = NegativeTimeRule.check_event(3, &HapticEvent::transient(-0.5, 0.5, 0.5));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "negative-time");
    }

    #[test]
    fn test_allows_zero() {
        assert!(NegativeTimeRule
            .check_event(0, &HapticEvent::transient(0.0, 0.5, 0.5))
            .is_empty());
    }
}
