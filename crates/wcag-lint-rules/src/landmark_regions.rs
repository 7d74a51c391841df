//! Rule checking that a page provides the core landmark regions.

use wcag_lint_core::structure::check_landmarks;
use wcag_lint_core::{FileContext, ParseResult, Rule, Severity, Suggestion, Violation};

/// Rule id for landmark-regions.
pub const ID: &str = "landmark-regions";

/// Rule name for landmark-regions.
pub const NAME: &str = "Landmark Regions";

const WCAG_REF: &str = "1.3.1 Info and Relationships (Level A)";

/// Reports required landmarks (`header`, `nav`, `main`, `footer`) absent
/// from a file that declares at least one landmark.
#[derive(Debug, Clone, Default)]
pub struct LandmarkRegions;

impl LandmarkRegions {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for LandmarkRegions {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Pages should provide header, nav, main and footer landmarks"
    }

    fn check(&self, ctx: &FileContext, parsed: &ParseResult) -> Vec<Violation> {
        if parsed.landmarks.is_empty() {
            return Vec::new();
        }

        let report = check_landmarks(&parsed.landmarks);
        if report.valid {
            return Vec::new();
        }

        let missing = report
            .missing
            .iter()
            .map(|l| format!("<{l}>"))
            .collect::<Vec<_>>()
            .join(", ");

        vec![Violation::new(
            ID,
            Severity::Medium,
            ctx.location(1, 0),
            format!("Page is missing landmark regions: {missing}"),
            WCAG_REF,
        )
        .with_code(ctx.line_text(1))
        .with_suggestion(Suggestion::new(
            "Wrap page regions in semantic landmark elements",
        ))]
    }
}
