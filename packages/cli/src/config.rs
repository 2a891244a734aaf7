use ahap_parser::DEFAULT_PROJECT;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_NAME: &str = "ahap.config.json";

/// `ahap.config.json` file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Run the linter as part of `inspect`
    #[serde(default)]
    pub strict: bool,

    /// File extensions picked up when a directory is given
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Project name used by `new`
    #[serde(default = "default_project")]
    pub default_project: String,

    /// Spaces per indentation level for `format`
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_extensions() -> Vec<String> {
    vec!["ahap".to_string(), "json".to_string()]
}

fn default_project() -> String {
    DEFAULT_PROJECT.to_string()
}

fn default_indent() -> usize {
    2
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn indent_str(&self) -> String {
        " ".repeat(self.indent)
    }

    /// Whether `path` has one of the configured extensions
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            extensions: default_extensions(),
            default_project: default_project(),
            indent: default_indent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "strict": true,
            "extensions": ["ahap"],
            "defaultProject": "Buzzers",
            "indent": 4
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.strict);
        assert_eq!(config.extensions, vec!["ahap"]);
        assert_eq!(config.default_project, "Buzzers");
        assert_eq!(config.indent_str(), "    ");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "strict": true }"#).unwrap();
        assert_eq!(config.extensions, vec!["ahap", "json"]);
        assert_eq!(config.default_project, "New Haptic Pattern");
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "indent": 3 }"#).unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.indent, 3);
        assert!(!config.strict);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ nope").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn test_matches_extension() {
        let config = Config::default();
        assert!(config.matches_extension(&PathBuf::from("tap.ahap")));
        assert!(config.matches_extension(&PathBuf::from("dir/TAP.JSON")));
        assert!(!config.matches_extension(&PathBuf::from("notes.txt")));
        assert!(!config.matches_extension(&PathBuf::from("ahap")));
    }
}
