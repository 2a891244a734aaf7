use crate::diagnostic::{Diagnostic, Target};
use crate::rules::LintRule;
use ahap_parser::{HapticEvent, CONTINUOUS_TAG, TRANSIENT_TAG};

/// Event types outside the transient/continuous vocabulary
pub struct UnknownEventTypeRule;

impl LintRule for UnknownEventTypeRule {
    fn name(&self) -> &'static str {
        "unknown-event-type"
    }

    fn description(&self) -> &'static str {
        "Warn about event types other than HapticTransient and HapticContinuous"
    }

    fn check_event(&self, index: usize, event: &HapticEvent) -> Vec<Diagnostic> {
        if event.kind().is_some() {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            self.name(),
            format!("Event {} has unknown type '{}'", index, event.event_type),
            Target::Event { index, id: event.id },
        )
        .with_suggestion(format!("Use {} or {}", TRANSIENT_TAG, CONTINUOUS_TAG))]
    }
}
