//! Locates the configuration for a scan.
//!
//! `--config` wins outright. Otherwise the project directory is searched
//! for `wcag-lint.toml`, `.wcag-lint.toml` and a `package.json` that carries
//! an `accessibility` key, in that order. After that comes `config.toml` in
//! the user config directory, and finally the built-in defaults.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use wcag_lint_core::{Config, PACKAGE_JSON_KEY};

/// Where the configuration of a scan comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `--config`; not checked for existence.
    Flag(PathBuf),
    /// A candidate file in the project directory.
    Project(PathBuf),
    /// `config.toml` in the user config directory.
    User(PathBuf),
    /// Nothing found.
    Builtin,
}

impl ConfigSource {
    /// Loads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        let path = match self {
            Self::Builtin => return Ok(Config::default()),
            Self::User(path) => {
                tracing::info!("Using user config: {}", path.display());
                path
            }
            Self::Flag(path) | Self::Project(path) => path,
        };
        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// A project file that may hold the configuration.
struct Candidate {
    file: &'static str,
    holds_config: fn(&Path) -> bool,
}

const PROJECT_CANDIDATES: &[Candidate] = &[
    Candidate {
        file: "wcag-lint.toml",
        holds_config: Path::is_file,
    },
    Candidate {
        file: ".wcag-lint.toml",
        holds_config: Path::is_file,
    },
    Candidate {
        file: "package.json",
        holds_config: declares_accessibility,
    },
];

const USER_CONFIG_FILE: &str = "config.toml";

/// Finds the configuration for a scan rooted at `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, flag: Option<&Path>) -> ConfigSource {
    lookup(project_dir, flag, user_config_dir().as_deref())
}

fn lookup(project_dir: &Path, flag: Option<&Path>, user_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = flag {
        return ConfigSource::Flag(path.to_path_buf());
    }

    let project = PROJECT_CANDIDATES
        .iter()
        .map(|c| (project_dir.join(c.file), c.holds_config))
        .find(|(path, holds_config)| holds_config(path));
    if let Some((path, _)) = project {
        tracing::debug!("Found project config: {}", path.display());
        return ConfigSource::Project(path);
    }

    match user_dir.map(|dir| dir.join(USER_CONFIG_FILE)) {
        Some(path) if path.is_file() => ConfigSource::User(path),
        _ => ConfigSource::Builtin,
    }
}

/// A readable manifest whose top level has the `accessibility` key.
fn declares_accessibility(manifest: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(manifest) else {
        return false;
    };
    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(value) => value.get(PACKAGE_JSON_KEY).is_some(),
        Err(e) => {
            tracing::debug!("Ignoring unparsable {}: {e}", manifest.display());
            false
        }
    }
}

/// `$WCAG_LINT_CONFIG_DIR`, else `~/.wcag-lint`.
fn user_config_dir() -> Option<PathBuf> {
    match std::env::var_os("WCAG_LINT_CONFIG_DIR") {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|h| h.join(".wcag-lint")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use wcag_lint_core::FailLevel;

    const WITH_KEY: &str = r#"{"name": "app", "accessibility": {"severity": "error"}}"#;

    /// Writes `files` into a fresh project and returns the chosen file name.
    fn chosen(files: &[(&str, &str)]) -> Option<String> {
        let tmp = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(tmp.path().join(name), content).unwrap();
        }
        match lookup(tmp.path(), None, None) {
            ConfigSource::Project(path) => {
                Some(path.file_name().unwrap().to_string_lossy().into_owned())
            }
            ConfigSource::Builtin => None,
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn project_candidates_in_order() {
        let cases: &[(&[(&str, &str)], Option<&str>)] = &[
            (&[("wcag-lint.toml", ""), (".wcag-lint.toml", "")], Some("wcag-lint.toml")),
            (&[(".wcag-lint.toml", ""), ("package.json", WITH_KEY)], Some(".wcag-lint.toml")),
            (&[("package.json", WITH_KEY)], Some("package.json")),
            (&[("package.json", r#"{"name": "app"}"#)], None),
            (&[("package.json", "{ not json")], None),
            (&[], None),
        ];
        for (files, expected) in cases {
            assert_eq!(chosen(files).as_deref(), *expected, "files: {files:?}");
        }
    }

    #[test]
    fn flag_wins_without_existence_check() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("wcag-lint.toml"), "").unwrap();
        let missing = tmp.path().join("missing.toml");

        let source = lookup(tmp.path(), Some(&missing), None);
        assert_eq!(source, ConfigSource::Flag(missing));

        let err = source.load().unwrap_err();
        assert!(err.to_string().starts_with("Failed to load config"));
    }

    #[test]
    fn user_config_only_after_project_misses() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("package.json"), r#"{"name": "app"}"#).unwrap();
        let user = TempDir::new().unwrap();

        assert_eq!(
            lookup(project.path(), None, Some(user.path())),
            ConfigSource::Builtin
        );

        fs::write(user.path().join("config.toml"), "").unwrap();
        assert_eq!(
            lookup(project.path(), None, Some(user.path())),
            ConfigSource::User(user.path().join("config.toml"))
        );
    }

    #[test]
    fn package_json_section_is_loaded() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), WITH_KEY).unwrap();

        let config = lookup(tmp.path(), None, None).load().unwrap();
        assert_eq!(config.severity, FailLevel::Error);
    }

    #[test]
    fn builtin_source_loads_defaults() {
        let config = ConfigSource::Builtin.load().unwrap();
        assert!(config.enabled);
        assert!(config.rules.is_empty());
    }
}
