//! Rule flagging buttons with neither content nor an ARIA label.

use wcag_lint_core::{query, FileContext, ParseResult, Rule, Severity, Suggestion, Violation};

/// Rule id for button-label.
pub const ID: &str = "button-label";

/// Rule name for button-label.
pub const NAME: &str = "Button Label";

const WCAG_REF: &str = "4.1.2 Name, Role, Value (Level A)";

/// Flags childless `button` elements without `aria-label`/`aria-labelledby`.
#[derive(Debug, Clone, Default)]
pub struct ButtonLabel;

impl ButtonLabel {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ButtonLabel {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Buttons need visible content or an ARIA label"
    }

    fn check(&self, ctx: &FileContext, parsed: &ParseResult) -> Vec<Violation> {
        query::unlabeled_buttons(parsed)
            .into_iter()
            .map(|element| {
                Violation::new(
                    ID,
                    Severity::High,
                    ctx.location(element.line, 0),
                    "Button has no accessible name",
                    WCAG_REF,
                )
                .with_code(ctx.line_text(element.line))
                .with_suggestion(Suggestion::new("Add text content or aria-label"))
            })
            .collect()
    }
}
