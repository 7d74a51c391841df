//! Rule flagging form controls with no programmatic label.

use wcag_lint_core::{query, FileContext, ParseResult, Rule, Severity, Suggestion, Violation};

/// Rule id for form-control-label.
pub const ID: &str = "form-control-label";

/// Rule name for form-control-label.
pub const NAME: &str = "Form Control Label";

const WCAG_REF: &str = "3.3.2 Labels or Instructions (Level A)";

/// Flags `input`, `select` and `textarea` elements lacking `id`,
/// `aria-label` and `aria-labelledby`.
#[derive(Debug, Clone, Default)]
pub struct FormControlLabel;

impl FormControlLabel {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FormControlLabel {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Form controls need an id for <label htmlFor> or an ARIA label"
    }

    fn check(&self, ctx: &FileContext, parsed: &ParseResult) -> Vec<Violation> {
        query::unlabeled_form_controls(parsed)
            .into_iter()
            .map(|element| {
                Violation::new(
                    ID,
                    Severity::High,
                    ctx.location(element.line, 0),
                    format!("<{}> has no associated label", element.element_type),
                    WCAG_REF,
                )
                .with_code(ctx.line_text(element.line))
                .with_suggestion(Suggestion::new(
                    "Add an id referenced by <label htmlFor>, or aria-label",
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use wcag_lint_core::{AttributeValue, Element};

    #[test]
    fn id_or_aria_label_satisfies() {
        let source = "<input />\n<input id=\"q\" />\n<textarea aria-label=\"Bio\" />\n<select />";
        let ctx = FileContext::new(Path::new("f.tsx"), source, Path::new("."));
        let parsed = ParseResult::new(
            "f.tsx",
            vec![
                Element::new("input", 1),
                Element::new("input", 2).with_attribute("id", AttributeValue::Str("q".into())),
                Element::new("textarea", 3)
                    .with_attribute("aria-label", AttributeValue::Str("Bio".into())),
                Element::new("select", 4),
            ],
            Vec::new(),
        );

        let found = FormControlLabel::new().check(&ctx, &parsed);
        let lines: Vec<usize> = found.iter().map(|v| v.location.line).collect();
        assert_eq!(lines, [1, 4]);
        assert_eq!(found[1].message, "<select> has no associated label");
    }
}
