use crate::config::Config;
use ahap_parser::format_json_with_indent;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// JSON or AHAP file to format
    pub file: PathBuf,

    /// Rewrite the file in place instead of printing
    #[arg(short, long)]
    pub write: bool,
}

pub fn format(args: FormatArgs, config: &Config) -> Result<()> {
    let source = fs::read_to_string(&args.file)?;

    if let Err(e) = serde_json::from_str::<serde_json::Value>(&source) {
        return Err(anyhow!("{} is not valid JSON: {}", args.file.display(), e));
    }

    let formatted = format_json_with_indent(&source, &config.indent_str());

    if args.write {
        if formatted == source {
            println!("{} {} already formatted", "✓".green(), args.file.display());
        } else {
            fs::write(&args.file, &formatted)?;
            println!("{} Formatted {}", "✓".green(), args.file.display());
        }
    } else {
        println!("{}", formatted);
    }

    Ok(())
}
