//! Optional strict validation for AHAP patterns.
//!
//! The parser accepts out-of-range and unknown values as-is; this crate
//! reports them without changing default parse behaviour.

mod diagnostic;
mod linter;
mod rules;

pub use diagnostic::{Diagnostic, DiagnosticLevel, Target};
pub use linter::{has_errors, lint_pattern, lint_source, validate_strict, LintOptions};
pub use rules::{LintRule, RuleRegistry};
