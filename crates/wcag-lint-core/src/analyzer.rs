//! Core analyzer for orchestrating scan execution.

use crate::config::Config;
use crate::context::FileContext;
use crate::model::{ParseError, ParserBox, SourceParser};
use crate::rule::{Rule, RuleBox};
use crate::types::{ScanReport, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while scanning one file.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading a file.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file is not valid source for its dialect.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    parsers: Vec<ParserBox>,
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory findings are reported relative to.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Registers a source parser.
    #[must_use]
    pub fn parser<P: SourceParser + 'static>(mut self, parser: P) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer, keeping only the rules the configuration enables.
    #[must_use]
    pub fn build(self) -> Analyzer {
        let config = self.config.unwrap_or_default();
        let root = self.root.unwrap_or_else(|| config.analyzer.root.clone());

        let known: Vec<&str> = self.rules.iter().map(|r| r.id()).collect();
        for unknown in config.unknown_rules(&known) {
            debug!("Ignoring unknown rule in config: {unknown}");
        }

        let rules = self
            .rules
            .into_iter()
            .filter(|rule| {
                let enabled = config.is_rule_enabled(rule.id());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.id());
                }
                enabled
            })
            .collect();

        Analyzer {
            root,
            parsers: self.parsers,
            rules,
            config,
        }
    }
}

/// The main analyzer that orchestrates scan execution.
///
/// Files are processed one at a time. A file that cannot be read or parsed
/// is logged, recorded in [`ScanReport::files_failed`] and contributes no
/// findings; the scan continues with the next file.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    parsers: Vec<ParserBox>,
    rules: Vec<RuleBox>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory findings are reported relative to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the ids of the enabled rules.
    #[must_use]
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Whether a registered parser accepts this path.
    #[must_use]
    pub fn handles(&self, path: &Path) -> bool {
        self.parser_for(path).is_some()
    }

    /// Scans the given files and returns a sorted report.
    ///
    /// Paths without a registered parser are skipped silently. When the
    /// configuration disables scanning, the report is empty.
    #[must_use]
    pub fn scan_files(&self, files: &[PathBuf]) -> ScanReport {
        let mut report = ScanReport::new();
        if !self.config.enabled {
            info!("Scanning disabled by configuration");
            return report;
        }

        info!("Scanning {} file(s) with {} rule(s)", files.len(), self.rule_count());

        for path in files {
            if !self.handles(path) {
                debug!("Skipping unsupported file: {}", path.display());
                continue;
            }

            match self.scan_file(path) {
                Ok(violations) => {
                    report.extend(violations);
                    report.files_scanned += 1;
                }
                Err(e) => {
                    warn!("{e}");
                    report.files_failed.push(path.clone());
                }
            }
        }

        report.sort();

        info!(
            "Scan complete: {} violation(s), {} warning(s) in {} file(s)",
            report.violations.len(),
            report.warnings.len(),
            report.files_scanned
        );

        report
    }

    /// Reads and scans a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<Violation>, AnalyzerError> {
        let content = std::fs::read_to_string(path).map_err(|e| AnalyzerError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(self.scan_source(path, &content)?)
    }

    /// Scans in-memory source text as if it were the file at `path`.
    ///
    /// A path no parser handles yields no findings.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the source is malformed; no rule runs in
    /// that case, including line-oriented ones.
    pub fn scan_source(&self, path: &Path, source: &str) -> Result<Vec<Violation>, ParseError> {
        let Some(parser) = self.parser_for(path) else {
            return Ok(Vec::new());
        };

        debug!("Scanning {} as {}", path.display(), parser.dialect());
        let parsed = parser.parse(source, path)?;
        let ctx = FileContext::new(path, source, &self.root);

        Ok(self
            .rules
            .iter()
            .flat_map(|rule| rule.check(&ctx, &parsed))
            .collect())
    }

    fn parser_for(&self, path: &Path) -> Option<&dyn SourceParser> {
        self.parsers
            .iter()
            .find(|p| p.handles(path))
            .map(|p| &**p)
    }
}
