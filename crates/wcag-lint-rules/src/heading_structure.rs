//! Rule checking heading order and `h1` uniqueness.
//!
//! Only files that contain at least one heading are checked. Component
//! files without page structure would otherwise all report a missing `h1`.

use wcag_lint_core::structure::{analyze_headings, HeadingIssueKind};
use wcag_lint_core::{FileContext, Label, ParseResult, Rule, Suggestion, Violation};

/// Rule id for heading-structure.
pub const ID: &str = "heading-structure";

/// Rule name for heading-structure.
pub const NAME: &str = "Heading Structure";

const WCAG_REF: &str = "1.3.1 Info and Relationships (Level A)";

/// Reports missing or duplicate `h1` headings and skipped levels.
#[derive(Debug, Clone, Default)]
pub struct HeadingStructure;

impl HeadingStructure {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for HeadingStructure {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Pages need exactly one h1 and no skipped heading levels"
    }

    fn check(&self, ctx: &FileContext, parsed: &ParseResult) -> Vec<Violation> {
        if parsed.headings.is_empty() {
            return Vec::new();
        }

        let report = analyze_headings(&parsed.headings);
        let first_heading = parsed.headings.iter().map(|h| h.line).min().unwrap_or(1);

        report
            .issues
            .into_iter()
            .map(|issue| {
                let line = issue.lines.first().copied().unwrap_or(first_heading);
                let mut violation = Violation::new(
                    ID,
                    issue.severity,
                    ctx.location(line, 0),
                    issue.message,
                    WCAG_REF,
                )
                .with_code(ctx.line_text(line));

                match issue.kind {
                    HeadingIssueKind::MissingH1 => {
                        violation = violation
                            .with_suggestion(Suggestion::new("Add one h1 naming the page"));
                    }
                    HeadingIssueKind::MultipleH1 => {
                        for &h1 in issue.lines.iter().skip(1) {
                            violation =
                                violation.with_label(Label::new(ctx.location(h1, 0), "another h1"));
                        }
                        violation = violation.with_suggestion(Suggestion::new(
                            "Keep one h1 and demote the others to h2",
                        ));
                    }
                    HeadingIssueKind::SkippedLevel => {}
                }
                violation
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use wcag_lint_core::{Element, Severity};

    fn check(elements: Vec<Element>) -> Vec<Violation> {
        let source = "<h1>A</h1>\n<h3>B</h3>\n<h1>C</h1>\n<h2>D</h2>";
        let ctx = FileContext::new(Path::new("p.tsx"), source, Path::new("."));
        let parsed = ParseResult::new("p.tsx", elements, Vec::new());
        HeadingStructure::new().check(&ctx, &parsed)
    }

    #[test]
    fn component_without_headings_is_skipped() {
        assert!(check(vec![Element::new("div", 1)]).is_empty());
    }

    #[test]
    fn skipped_level_points_at_offending_heading() {
        let found = check(vec![Element::new("h1", 1), Element::new("h3", 2)]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].message, "Heading level skipped: h3 after h1");
        assert_eq!(found[0].severity, Severity::Medium);
        assert_eq!(found[0].location.line, 2);
        assert_eq!(found[0].code, "<h3>B</h3>");
    }

    #[test]
    fn duplicate_h1_labels_each_extra() {
        let found = check(vec![Element::new("h1", 1), Element::new("h1", 3)]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, Severity::High);
        assert_eq!(found[0].location.line, 1);
        assert_eq!(found[0].labels.len(), 1);
        assert_eq!(found[0].labels[0].location.line, 3);
    }

    #[test]
    fn missing_h1_reports_at_first_heading() {
        let found = check(vec![Element::new("h2", 4)]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].message, "Page should have exactly one h1 heading");
        assert_eq!(found[0].location.line, 4);
    }
}
