use crate::diagnostic::{Diagnostic, Target};
use crate::rules::LintRule;
use ahap_parser::HapticEvent;

/// NaN and infinities cannot be written to JSON
pub struct NonFiniteValueRule;

impl LintRule for NonFiniteValueRule {
    fn name(&self) -> &'static str {
        "non-finite-value"
    }

    fn description(&self) -> &'static str {
        "Disallow NaN or infinite event fields"
    }

    fn check_event(&self, index: usize, event: &HapticEvent) -> Vec<Diagnostic> {
        [
            ("Time", event.time),
            ("HapticIntensity", event.intensity),
            ("HapticSharpness", event.sharpness),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_finite())
        .map(|(field, value)| {
            Diagnostic::error(
                self.name(),
                format!("{} of event {} is {}", field, index, value),
                Target::Event { index, id: event.id },
            )
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_nan_and_infinity() {
        let event = HapticEvent::transient(f64::NAN, f64::INFINITY, 0.5);
        let diagnostics = NonFiniteValueRule.check_event(0, &event);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message, "Time of event 0 is NaN");
        assert_eq!(diagnostics[1].message, "HapticIntensity of event 0 is inf");
    }
}
