use super::{document_name, print_diagnostics};
use crate::config::Config;
use ahap_editor::Document;
use ahap_linter::{has_errors, lint_source, LintOptions};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// AHAP file to inspect
    pub file: PathBuf,
}

pub fn inspect(args: InspectArgs, config: &Config, verbose: bool) -> Result<()> {
    let content = fs::read_to_string(&args.file)?;
    let document = Document::new(document_name(&args.file), content);

    print!("{}", render_summary(&document)?);

    if config.strict {
        let diagnostics = lint_source(document.raw_content(), LintOptions::default());
        println!();
        if diagnostics.is_empty() {
            println!("{} No issues found", "✓".green());
        } else {
            print_diagnostics(&diagnostics, verbose);
        }

        if has_errors(&diagnostics) {
            return Err(anyhow!("{} failed strict validation", args.file.display()));
        }
    }

    Ok(())
}

/// Summary block and event table for a document
pub(crate) fn render_summary(document: &Document) -> Result<String> {
    let metadata = document
        .metadata()
        .ok_or_else(|| anyhow!("{} is not valid JSON", document.name()))?;

    let mut out = String::new();
    writeln!(out, "{}", document.name().bold())?;
    writeln!(out, "  Version:     {}", metadata.version.as_deref().unwrap_or("-"))?;
    writeln!(out, "  Description: {}", metadata.description.as_deref().unwrap_or("-"))?;
    writeln!(out, "  Duration:    {:.2}s", metadata.duration)?;

    let events = document.events();
    writeln!(out, "  Events:      {}", events.len())?;

    if let Some(pattern) = document.pattern() {
        if !pattern.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "  {:>8}  {:<18} {:>9}  {:>9}",
                "Time", "Type", "Intensity", "Sharpness"
            )?;
            for event in pattern.sorted_events() {
                writeln!(
                    out,
                    "  {:>8.3}  {:<18} {:>9.2}  {:>9.2}",
                    event.time, event.event_type, event.intensity, event.sharpness
                )?;
            }
        }
    }

    Ok(out)
}
