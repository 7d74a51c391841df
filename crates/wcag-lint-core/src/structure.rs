//! Document-structure analyzers: heading hierarchy and landmark coverage.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::model::Element;
use crate::types::Severity;

/// Landmarks every page is expected to provide, in reporting order.
pub const REQUIRED_LANDMARKS: &[&str] = &["header", "nav", "main", "footer"];

/// Kind of heading-hierarchy problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingIssueKind {
    /// No `h1` at all.
    MissingH1,
    /// More than one `h1`.
    MultipleH1,
    /// A level jump greater than one, e.g. `h2` followed by `h4`.
    SkippedLevel,
}

impl HeadingIssueKind {
    /// Kebab-case identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingH1 => "missing-h1",
            Self::MultipleH1 => "multiple-h1",
            Self::SkippedLevel => "skipped-level",
        }
    }
}

/// One heading-hierarchy problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingIssue {
    /// What went wrong.
    pub kind: HeadingIssueKind,
    /// Human-readable description.
    pub message: String,
    /// Severity of the issue.
    pub severity: Severity,
    /// Lines involved: every `h1` for `multiple-h1`, the offending heading
    /// for `skipped-level`, empty for `missing-h1`.
    pub lines: Vec<usize>,
}

/// Outcome of [`analyze_headings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingReport {
    /// True when no issues were found.
    pub valid: bool,
    /// Issues in detection order.
    pub issues: Vec<HeadingIssue>,
    /// Number of headings analyzed.
    pub heading_count: usize,
    /// Number of `h1` headings.
    pub h1_count: usize,
}

/// Checks heading order and `h1` uniqueness.
///
/// Headings are sorted by line first. A skipped level is reported against
/// the heading immediately before it, so `h1, h4, h5` reports once.
#[must_use]
pub fn analyze_headings(headings: &[Element]) -> HeadingReport {
    let mut sorted: Vec<(&Element, u8)> = headings
        .iter()
        .filter_map(|h| h.heading_level().map(|level| (h, level)))
        .collect();
    sorted.sort_by_key(|(h, _)| h.line);

    let h1_lines: Vec<usize> = sorted
        .iter()
        .filter(|(_, level)| *level == 1)
        .map(|(h, _)| h.line)
        .collect();

    let mut issues = Vec::new();
    match h1_lines.len() {
        0 => issues.push(HeadingIssue {
            kind: HeadingIssueKind::MissingH1,
            message: "Page should have exactly one h1 heading".to_string(),
            severity: Severity::High,
            lines: Vec::new(),
        }),
        1 => {}
        n => issues.push(HeadingIssue {
            kind: HeadingIssueKind::MultipleH1,
            message: format!("Page has {n} h1 headings, should have exactly one"),
            severity: Severity::High,
            lines: h1_lines.clone(),
        }),
    }

    let mut previous = 0u8;
    for (heading, level) in &sorted {
        if previous > 0 && *level > previous + 1 {
            issues.push(HeadingIssue {
                kind: HeadingIssueKind::SkippedLevel,
                message: format!("Heading level skipped: h{level} after h{previous}"),
                severity: Severity::Medium,
                lines: vec![heading.line],
            });
        }
        previous = *level;
    }

    HeadingReport {
        valid: issues.is_empty(),
        issues,
        heading_count: sorted.len(),
        h1_count: h1_lines.len(),
    }
}

/// Outcome of [`check_landmarks`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandmarkReport {
    /// True when every required landmark is present.
    pub valid: bool,
    /// Required landmarks that are absent, in [`REQUIRED_LANDMARKS`] order.
    pub missing: Vec<String>,
    /// Landmarks found in the file.
    pub present: BTreeSet<String>,
}

/// Compares present landmarks against [`REQUIRED_LANDMARKS`].
#[must_use]
pub fn check_landmarks(present: &BTreeSet<String>) -> LandmarkReport {
    let missing: Vec<String> = REQUIRED_LANDMARKS
        .iter()
        .filter(|l| !present.contains(**l))
        .map(|l| (*l).to_string())
        .collect();

    LandmarkReport {
        valid: missing.is_empty(),
        missing,
        present: present.clone(),
    }
}
