use super::{collect_files, print_diagnostics};
use crate::config::Config;
use ahap_linter::{lint_source, Diagnostic, DiagnosticLevel, LintOptions, RuleRegistry};
use anyhow::{anyhow, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct LintArgs {
    /// AHAP file or directory to lint
    #[arg(required_unless_present = "list_rules")]
    pub input: Option<PathBuf>,

    /// Print the built-in rules and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Diagnostics for one file, as emitted by `--format json`
#[derive(Debug, Serialize)]
struct FileReport<'a> {
    path: String,
    diagnostics: &'a [Diagnostic],
}

#[derive(Debug, Default, PartialEq)]
struct Totals {
    files: usize,
    errors: usize,
    warnings: usize,
}

impl Totals {
    fn record(&mut self, diagnostics: &[Diagnostic]) {
        self.files += 1;
        for diagnostic in diagnostics {
            match diagnostic.level {
                DiagnosticLevel::Error => self.errors += 1,
                DiagnosticLevel::Warning => self.warnings += 1,
                DiagnosticLevel::Info => {}
            }
        }
    }
}

pub fn lint(args: LintArgs, config: &Config, verbose: bool) -> Result<()> {
    if args.list_rules {
        print!("{}", render_rules(&RuleRegistry::new()));
        return Ok(());
    }

    let input = args
        .input
        .ok_or_else(|| anyhow!("No input given (pass a file or directory)"))?;
    let files = collect_files(&input, config)?;
    let mut totals = Totals::default();

    for file in &files {
        let diagnostics = lint_file(file)?;
        totals.record(&diagnostics);

        match args.format {
            OutputFormat::Json => {
                let report = FileReport {
                    path: file.display().to_string(),
                    diagnostics: &diagnostics,
                };
                println!("{}", serde_json::to_string(&report)?);
            }
            OutputFormat::Text => {
                if diagnostics.is_empty() {
                    if verbose {
                        println!("{} {}", "✓".green(), file.display());
                    }
                    continue;
                }
                println!("{}", file.display());
                print_diagnostics(&diagnostics, verbose);
                println!();
            }
        }
    }

    if args.format == OutputFormat::Text {
        println!("   Files checked: {}", totals.files);
        if totals.errors > 0 {
            println!("   {} {}", "Errors:".red(), totals.errors);
        }
        if totals.warnings > 0 {
            println!("   {} {}", "Warnings:".yellow(), totals.warnings);
        }
        if totals.errors == 0 && totals.warnings == 0 {
            println!("   {} No issues found!", "✓".green());
        }
    }

    if totals.errors > 0 {
        return Err(anyhow!(
            "{} error(s) in {} file(s)",
            totals.errors,
            totals.files
        ));
    }

    Ok(())
}

/// One line per rule: name and description
fn render_rules(registry: &RuleRegistry) -> String {
    registry
        .rules()
        .iter()
        .map(|rule| format!("  {:<20} {}\n", rule.name(), rule.description()))
        .collect()
}

fn lint_file(path: &Path) -> Result<Vec<Diagnostic>> {
    let source = fs::read_to_string(path)?;
    Ok(lint_source(&source, LintOptions::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ahap");
        fs::write(
            &path,
            r#"{"Pattern": [
                {"Event": {"Time": 0}},
                {"Event": {"Time": 0.1, "EventType": "HapticTransient",
                    "EventParameters": [{"ParameterID": "HapticIntensity", "ParameterValue": 3}]}}
            ]}"#,
        )
        .unwrap();

        let mut totals = Totals::default();
        totals.record(&lint_file(&path).unwrap());

        assert_eq!(
            totals,
            Totals {
                files: 1,
                errors: 1,
                warnings: 1
            }
        );
    }

    #[test]
    fn test_lint_fails_on_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ok.ahap"), "{}").unwrap();
        fs::write(dir.path().join("broken.json"), "{").unwrap();

        let args = LintArgs {
            input: Some(dir.path().to_path_buf()),
            list_rules: false,
            format: OutputFormat::Json,
        };
        let err = lint(args, &Config::default(), false).unwrap_err();
        assert_eq!(err.to_string(), "1 error(s) in 2 file(s)");
    }

    #[test]
    fn test_lint_clean_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("tap.ahap"),
            r#"{"Pattern": [{"Event": {"Time": 0, "EventType": "HapticTransient"}}]}"#,
        )
        .unwrap();

        let args = LintArgs {
            input: Some(dir.path().to_path_buf()),
            list_rules: false,
            format: OutputFormat::Text,
        };
        assert!(lint(args, &Config::default(), true).is_ok());
    }

    #[test]
    fn test_render_rules_lists_descriptions() {
        let listing = render_rules(&RuleRegistry::new());

        assert_eq!(listing.lines().count(), 5);
        assert!(listing.contains("negative-time"));
        assert!(listing.contains("Disallow events with a negative Time"));
    }

    #[test]
    fn test_list_rules_needs_no_input() {
        let args = LintArgs {
            input: None,
            list_rules: true,
            format: OutputFormat::Text,
        };
        assert!(lint(args, &Config::default(), false).is_ok());
    }
}
