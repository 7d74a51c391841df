//! Core types for accessibility findings and scan reports.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for accessibility findings.
///
/// `Critical` and `High` findings are violations; `Medium` and `Low`
/// findings are warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Minor issue or stylistic hint.
    Low,
    /// Should be addressed, but does not block assistive technology.
    Medium,
    /// Blocks or seriously degrades assistive technology use.
    High,
    /// Content is unusable for some users.
    Critical,
}

impl Severity {
    /// Returns true if findings at this severity belong in the violations bucket.
    #[must_use]
    pub fn is_violation(self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as given to the scanner.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, 0 when unknown).
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self { file, line, column }
    }
}

/// A labeled location for additional context in findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Location of the label.
    pub location: Location,
    /// Message for this label.
    pub message: String,
}

impl Label {
    /// Creates a new label.
    #[must_use]
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

/// Advisory remediation for a finding. Never applied to source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An accessibility finding. Immutable once constructed apart from the builder methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule id (e.g., "form-labels").
    pub rule: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Primary location of the finding.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// WCAG success criterion (e.g., "1.1.1 Non-text Content (Level A)").
    pub wcag_ref: String,
    /// Trimmed text of the offending source line.
    pub code: String,
    /// Optional advisory suggestion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
    /// Additional labels for context.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Violation {
    /// Creates a new finding.
    #[must_use]
    pub fn new(
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
        wcag_ref: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            wcag_ref: wcag_ref.into(),
            code: String::new(),
            suggestion: None,
            labels: Vec::new(),
        }
    }

    /// Attaches the offending source text.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Adds a suggestion to this finding.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Adds a label to this finding.
    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Formats the finding for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{}:{} [{}]\n",
            self.location.file.display(),
            self.location.line,
            self.rule,
        );
        let _ = writeln!(
            output,
            "  {}: {}",
            self.severity.to_string().to_uppercase(),
            self.message
        );
        let _ = writeln!(output, "  WCAG: {}", self.wcag_ref);
        if !self.code.is_empty() {
            let _ = writeln!(output, "  Code: {}", self.code);
        }
        for label in &self.labels {
            let _ = writeln!(
                output,
                "  = note: line {}: {}",
                label.location.line, label.message
            );
        }
        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(output, "  = help: {}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {} (WCAG {})",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.rule,
            self.message,
            self.wcag_ref,
        )
    }
}

/// Result of scanning a set of files.
///
/// Findings are split into two ordered buckets by severity.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Critical and high severity findings.
    pub violations: Vec<Violation>,
    /// Medium and low severity findings.
    pub warnings: Vec<Violation>,
    /// Number of files analyzed to completion.
    pub files_scanned: usize,
    /// Files skipped because they could not be read or parsed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files_failed: Vec<PathBuf>,
}

impl ScanReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finding to the bucket its severity selects.
    pub fn push(&mut self, violation: Violation) {
        if violation.severity.is_violation() {
            self.violations.push(violation);
        } else {
            self.warnings.push(violation);
        }
    }

    /// Appends every finding in order.
    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        for v in violations {
            self.push(v);
        }
    }

    /// Total number of findings in both buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.violations.len() + self.warnings.len()
    }

    /// Returns true if nothing was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Returns true if any critical or high finding exists.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Stable-sorts both buckets by file, then line.
    ///
    /// Findings on the same line keep their evaluation order.
    pub fn sort(&mut self) {
        let key = |v: &Violation| (v.location.file.clone(), v.location.line);
        self.violations.sort_by_key(key);
        self.warnings.sort_by_key(key);
    }

    /// Formats the whole report for terminal output.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        if self.is_clean() {
            return format!(
                "No accessibility issues found in {} file(s)\n",
                self.files_scanned
            );
        }

        let mut report = String::new();
        if !self.violations.is_empty() {
            let _ = writeln!(report, "{} violation(s) found:\n", self.violations.len());
            for (i, v) in self.violations.iter().enumerate() {
                let _ = writeln!(report, "{}. {}", i + 1, v.format());
            }
        }
        if !self.warnings.is_empty() {
            let _ = writeln!(report, "{} warning(s) found:\n", self.warnings.len());
            for (i, w) in self.warnings.iter().enumerate() {
                let _ = writeln!(report, "{}. {}", i + 1, w.format());
            }
        }
        let _ = writeln!(
            report,
            "Total: {} violation(s), {} warning(s) in {} file(s)",
            self.violations.len(),
            self.warnings.len(),
            self.files_scanned
        );
        report
    }
}
