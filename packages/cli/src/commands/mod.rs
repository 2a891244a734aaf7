pub mod format;
pub mod init;
pub mod inspect;
pub mod lint;
pub mod new;

pub use format::{format, FormatArgs};
pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};
pub use lint::{lint, LintArgs};
pub use new::{new, NewArgs};

use crate::config::Config;
use ahap_linter::{Diagnostic, DiagnosticLevel};
use anyhow::{anyhow, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve `input` to the AHAP files it names
///
/// A file is taken as-is; a directory is walked for configured extensions.
pub(crate) fn collect_files(input: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| config.matches_extension(path))
        // Never lint our own config file
        .filter(|path| !path.ends_with(crate::config::DEFAULT_CONFIG_NAME))
        .collect();

    files.sort();
    Ok(files)
}

/// Display name for a file: its stem, or the full path if it has none
pub(crate) fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub(crate) fn print_diagnostics(diagnostics: &[Diagnostic], verbose: bool) {
    for diagnostic in diagnostics {
        if !verbose && matches!(diagnostic.level, DiagnosticLevel::Info) {
            continue;
        }

        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };

        println!("  {} [{}] {}", level_str, diagnostic.rule, diagnostic.message);

        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "hint:".dimmed(), suggestion.dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_collect_files_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.ahap"), "{}").unwrap();
        fs::write(dir.path().join("nested/a.json"), "{}").unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();
        fs::write(dir.path().join("ahap.config.json"), "{}").unwrap();

        let files = collect_files(dir.path(), &Config::default()).unwrap();
        let names: Vec<String> = files.iter().map(|p| document_name(p)).collect();

        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_collect_single_file_ignores_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pattern.txt");
        fs::write(&path, "{}").unwrap();

        assert_eq!(collect_files(&path, &Config::default()).unwrap(), vec![path]);
    }

    #[test]
    fn test_collect_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_files(&dir.path().join("nope"), &Config::default()).is_err());
    }
}
