use crate::diagnostic::{Diagnostic, Target};
use crate::rules::RuleRegistry;
use ahap_parser::{parse_with_report, Pattern};

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

/// Lint a structured pattern and return diagnostics
pub fn lint_pattern(pattern: &Pattern, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();

    for rule in registry.rules() {
        diagnostics.extend(rule.check_pattern(pattern));
    }

    for (index, event) in pattern.sorted_events().into_iter().enumerate() {
        for rule in registry.rules() {
            diagnostics.extend(rule.check_event(index, event));
        }
    }

    diagnostics
}

/// Lint AHAP text, including entries the parser had to skip
///
/// Malformed JSON yields a single `malformed-json` error.
pub fn lint_source(text: &str, options: LintOptions) -> Vec<Diagnostic> {
    let output = match parse_with_report(text) {
        Ok(output) => output,
        Err(e) => {
            return vec![Diagnostic::error("malformed-json", e.to_string(), Target::Document)];
        }
    };

    let mut diagnostics: Vec<Diagnostic> = output
        .skipped
        .iter()
        .map(|skipped| {
            Diagnostic::warning(
                "skipped-entry",
                format!("Pattern entry {} was ignored: {}", skipped.index, skipped.reason),
                Target::Entry {
                    index: skipped.index,
                },
            )
        })
        .collect();

    diagnostics.extend(lint_pattern(&output.pattern, options));
    diagnostics
}

/// Parse in strict mode: succeed only if no error-level diagnostics remain
pub fn validate_strict(text: &str) -> Result<Pattern, Vec<Diagnostic>> {
    let diagnostics = lint_source(text, LintOptions::default());
    if has_errors(&diagnostics) {
        return Err(diagnostics);
    }

    // Lint found no malformed JSON, so this parse succeeds
    ahap_parser::parse(text).map_err(|e| {
        vec![Diagnostic::error("malformed-json", e.to_string(), Target::Document)]
    })
}

pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}
