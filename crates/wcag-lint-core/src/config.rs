//! Configuration types for wcag-lint.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Key under which `package.json` carries the scanner configuration.
pub const PACKAGE_JSON_KEY: &str = "accessibility";

/// Top-level configuration for wcag-lint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// When false, scanning is a no-op.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether violations fail the run (`error`) or only report (`warning`).
    #[serde(default)]
    pub severity: FailLevel,

    /// Rule ids to run. Empty means every registered rule.
    #[serde(default)]
    pub rules: Vec<String>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            severity: FailLevel::default(),
            rules: Vec::new(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    ///
    /// A file named `package.json` is read as JSON and the configuration is
    /// taken from its `accessibility` key; a missing key yields defaults.
    /// Every other file is read as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if path.file_name().is_some_and(|n| n == "package.json") {
            Self::from_package_json(&content)
        } else {
            Self::parse(&content)
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses the `accessibility` section of a `package.json` document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or the section has the wrong shape.
    pub fn from_package_json(content: &str) -> Result<Self, ConfigError> {
        let mut manifest: serde_json::Value = serde_json::from_str(content)?;
        match manifest.get_mut(PACKAGE_JSON_KEY) {
            Some(section) => Ok(serde_json::from_value(section.take())?),
            None => Ok(Self::default()),
        }
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        self.rules.is_empty() || self.rules.iter().any(|r| r == rule_id)
    }

    /// Returns configured rule ids that are not in `known`.
    #[must_use]
    pub fn unknown_rules<'a>(&'a self, known: &[&str]) -> Vec<&'a str> {
        self.rules
            .iter()
            .map(String::as_str)
            .filter(|r| !known.contains(r))
            .collect()
    }

    /// Whether a report with violations should fail the run.
    #[must_use]
    pub fn fails_on_violations(&self) -> bool {
        self.severity == FailLevel::Error
    }
}

/// How violations affect the exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailLevel {
    /// Report only.
    #[default]
    Warning,
    /// Violations fail the run.
    Error,
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to scan (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from scanning.
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_excludes(),
            respect_gitignore: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_excludes() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/dist/**".to_string(),
        "**/build/**".to_string(),
    ]
}

fn default_true() -> bool {
    true
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in a TOML config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Parse error in a `package.json` config section.
    #[error("Failed to parse package.json config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.enabled);
        assert_eq!(config.severity, FailLevel::Warning);
        assert!(config.rules.is_empty());
        assert!(config.analyzer.respect_gitignore);
        assert!(config.is_rule_enabled("alt-text"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
enabled = true
severity = "error"
rules = ["alt-text", "form-labels"]

[analyzer]
root = "./src"
exclude = ["**/generated/**"]
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./src"));
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**"]);
        assert!(config.fails_on_violations());
        assert!(config.is_rule_enabled("alt-text"));
        assert!(!config.is_rule_enabled("semantic-html"));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::parse("").expect("Failed to parse");
        assert!(config.enabled);
        assert!(!config.fails_on_violations());
        assert_eq!(config.analyzer.exclude.len(), 3);
    }

    #[test]
    fn test_package_json_section() {
        let json = r#"{
            "name": "app",
            "accessibility": { "enabled": false, "rules": ["alt-text"] }
        }"#;
        let config = Config::from_package_json(json).expect("Failed to parse");
        assert!(!config.enabled);
        assert_eq!(config.rules, vec!["alt-text"]);
        assert_eq!(config.severity, FailLevel::Warning);
    }

    #[test]
    fn test_package_json_without_section() {
        let config = Config::from_package_json(r#"{ "name": "app" }"#).expect("Failed to parse");
        assert!(config.enabled);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_package_json_invalid() {
        let err = Config::from_package_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_unknown_rules() {
        let config = Config {
            rules: vec!["alt-text".into(), "no-such-rule".into()],
            ..Config::default()
        };
        assert_eq!(config.unknown_rules(&["alt-text"]), vec!["no-such-rule"]);
    }
}
