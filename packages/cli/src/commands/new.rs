use crate::config::Config;
use ahap_editor::{find_template, templates};
use ahap_parser::{generate, generate_empty};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Start from a built-in template (e.g. "double-tap")
    #[arg(short, long)]
    pub template: Option<String>,

    /// Project name written to the metadata
    #[arg(short, long)]
    pub project: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub force: bool,

    /// List the built-in templates and exit
    #[arg(long)]
    pub list: bool,
}

pub fn new(args: NewArgs, config: &Config) -> Result<()> {
    if args.list {
        for template in templates() {
            println!("  {:<18} {}", template.key().bold(), template.description);
        }
        return Ok(());
    }

    let content = render(args.template.as_deref(), args.project.as_deref(), config)?;

    match args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(anyhow!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
            fs::write(&path, content)?;
            println!("{} Created {}", "✓".green(), path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}

/// AHAP text for a new pattern, optionally seeded from a template
///
/// Without `--project` a template keeps its own name as the project.
pub(crate) fn render(template: Option<&str>, project: Option<&str>, config: &Config) -> Result<String> {
    let Some(name) = template else {
        return Ok(generate_empty(project.unwrap_or(&config.default_project)));
    };

    let template = find_template(name).ok_or_else(|| {
        let known: Vec<String> = templates().iter().map(|t| t.key()).collect();
        anyhow!("Unknown template '{}'. Available: {}", name, known.join(", "))
    })?;

    let mut pattern = template.to_pattern();
    if let Some(project) = project {
        pattern.project = Some(project.to_string());
    }

    Ok(generate(&pattern))
}
