use crate::diagnostic::{Diagnostic, Target};
use crate::rules::LintRule;
use ahap_parser::HapticEvent;

/// Intensity and sharpness must lie in [0, 1]
pub struct ParameterRangeRule;

impl LintRule for ParameterRangeRule {
    fn name(&self) -> &'static str {
        "parameter-range"
    }

    fn description(&self) -> &'static str {
        "Require HapticIntensity and HapticSharpness within [0, 1]"
    }

    fn check_event(&self, index: usize, event: &HapticEvent) -> Vec<Diagnostic> {
        let target = Target::Event { index, id: event.id };

        [("HapticIntensity", event.intensity), ("HapticSharpness", event.sharpness)]
            .into_iter()
            // Non-finite values are reported by their own rule
            .filter(|(_, value)| value.is_finite() && !(0.0..=1.0).contains(value))
            .map(|(parameter, value)| {
                Diagnostic::error(
                    self.name(),
                    format!(
                        "{} of event {} at {}s is {}, outside [0, 1]",
                        parameter, index, event.time, value
                    ),
                    target,
                )
                .with_suggestion(format!("Clamp {} to {}", parameter, value.clamp(0.0, 1.0)))
            })
            .collect()
    }
}
