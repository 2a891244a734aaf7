mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    format, init, inspect, lint, new, FormatArgs, InitArgs, InspectArgs, LintArgs, NewArgs,
};
use config::Config;
use tracing_subscriber::EnvFilter;

/// ahap - inspect, validate and author Apple Haptic and Audio Pattern files
#[derive(Parser, Debug)]
#[command(name = "ahap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show info-level diagnostics and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show metadata and events of an AHAP file
    Inspect(InspectArgs),

    /// Validate AHAP files strictly
    Lint(LintArgs),

    /// Pretty-print a JSON document
    Format(FormatArgs),

    /// Generate a new AHAP document
    New(NewArgs),

    /// Write a default ahap.config.json
    Init(InitArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let load_config = || -> anyhow::Result<Config> {
        let config = Config::load(&cwd)?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    };

    match cli.command {
        Command::Inspect(args) => inspect(args, &load_config()?, cli.verbose),
        Command::Lint(args) => lint(args, &load_config()?, cli.verbose),
        Command::Format(args) => format(args, &load_config()?),
        Command::New(args) => new(args, &load_config()?),
        Command::Init(args) => init(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
