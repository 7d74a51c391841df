//! Scan command implementation.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use wcag_lint_core::{Analyzer, AnalyzerError, Config, ScanReport};
use wcag_lint_jsx::JsxParser;
use wcag_lint_rules::all_rules;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Command-line options of `scan`.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Explicitly listed files.
    pub files: Vec<PathBuf>,
    /// Walk the project instead of using `files`.
    pub all: bool,
    /// Project root.
    pub root: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule ids overriding the configured set.
    pub rules: Option<String>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Render parse failures in full.
    pub verbose: bool,
}

/// Result of a scan run.
#[derive(Debug)]
pub struct ScanOutcome {
    /// The printed report.
    pub report: ScanReport,
    fail_on_violations: bool,
}

impl ScanOutcome {
    /// Whether the process should exit with a failure status.
    #[must_use]
    pub fn should_fail(&self) -> bool {
        self.fail_on_violations && self.report.has_violations()
    }
}

/// Runs the scan command and prints the report.
///
/// # Errors
///
/// Fails when the configuration cannot be loaded, no files were given,
/// an exclude pattern is invalid or the report cannot be written.
pub fn run(options: ScanOptions, source: &ConfigSource) -> Result<ScanOutcome> {
    let mut config = source.load()?;
    if let Some(filter) = &options.rules {
        config.rules = parse_rule_filter(filter);
    }

    if !config.enabled {
        tracing::info!("Accessibility scanner is disabled (set enabled = true to scan)");
        return Ok(ScanOutcome {
            report: ScanReport::new(),
            fail_on_violations: false,
        });
    }

    let analyzer = build_analyzer(&options.root, config)?;

    let files = if options.all {
        let mut excludes = analyzer.config().analyzer.exclude.clone();
        excludes.extend(options.exclude.iter().cloned());
        let configured = analyzer.config().analyzer.root.as_path();
        let walk_root = if configured == Path::new(".") {
            options.root.clone()
        } else {
            options.root.join(configured)
        };
        discover_files(
            &walk_root,
            &options.root,
            &excludes,
            analyzer.config().analyzer.respect_gitignore,
            |p| analyzer.handles(p),
        )?
    } else if options.files.is_empty() {
        bail!("No files to scan. Pass file paths or use --all.");
    } else {
        options
            .files
            .iter()
            .filter(|p| analyzer.handles(p))
            .cloned()
            .collect()
    };

    if files.is_empty() {
        tracing::info!("No .tsx or .jsx files to scan");
    }

    let report = analyzer.scan_files(&files);

    if options.verbose {
        render_parse_failures(&analyzer, &report);
    }

    super::output::print(&report, options.format)?;

    Ok(ScanOutcome {
        report,
        fail_on_violations: analyzer.config().fails_on_violations(),
    })
}

fn build_analyzer(root: &Path, config: Config) -> Result<Analyzer> {
    let rules = all_rules().context("Failed to compile built-in rules")?;
    Ok(Analyzer::builder()
        .root(root)
        .config(config)
        .parser(JsxParser::tsx())
        .parser(JsxParser::jsx())
        .rules(rules)
        .build())
}

/// Splits `a, b,c` into rule ids, dropping empty entries.
fn parse_rule_filter(filter: &str) -> Vec<String> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Walks `walk_root` and returns the sorted files `handles` accepts.
///
/// Exclude patterns are matched against the path relative to `root`.
fn discover_files(
    walk_root: &Path,
    root: &Path,
    exclude: &[String],
    respect_gitignore: bool,
    handles: impl Fn(&Path) -> bool,
) -> Result<Vec<PathBuf>> {
    let patterns = exclude
        .iter()
        .map(|p| glob::Pattern::new(p).with_context(|| format!("Invalid exclude pattern: {p}")))
        .collect::<Result<Vec<_>>>()?;

    let mut builder = ignore::WalkBuilder::new(walk_root);
    builder
        .hidden(false)
        .git_ignore(respect_gitignore)
        .require_git(false);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !handles(path) {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if is_excluded(rel, exclude, &patterns) {
            tracing::debug!("Excluded: {}", rel.display());
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn is_excluded(rel: &Path, raw: &[String], patterns: &[glob::Pattern]) -> bool {
    let rel_str = rel.to_string_lossy();
    let rel_str = rel_str.strip_prefix("./").unwrap_or(&rel_str);

    if patterns.iter().any(|p| p.matches(rel_str)) {
        return true;
    }

    // `**/dir/**` style patterns also match as a path segment.
    raw.iter().any(|pattern| {
        let clean = pattern.replace("**/", "").replace("/**", "");
        !clean.is_empty()
            && !clean.contains('*')
            && rel.components().any(|c| c.as_os_str() == clean.as_str())
    })
}

/// Re-reads files that failed and prints the full diagnostic.
fn render_parse_failures(analyzer: &Analyzer, report: &ScanReport) {
    for path in &report.files_failed {
        if let Err(AnalyzerError::Parse(e)) = analyzer.scan_file(path) {
            eprintln!("{:?}", miette::Report::new(e));
        }
    }
}
