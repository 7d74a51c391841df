//! Rule judging text contrast declared through utility classes.
//!
//! Elements whose `className` is a string literal are resolved against the
//! palette. Only pairs where both colors are known and the ratio falls
//! short of WCAG AA are reported; unknown colors are never a finding.

use tracing::trace;
use wcag_lint_contrast::{check_text_contrast, extract_colors, extract_typography, suggest_tokens};
use wcag_lint_core::{FileContext, ParseResult, Rule, Severity, Suggestion, Violation};

/// Rule id for color-contrast.
pub const ID: &str = "color-contrast";

/// Rule name for color-contrast.
pub const NAME: &str = "Color Contrast";

const WCAG_REF: &str = "1.4.3 Contrast (Minimum) (Level AA)";

/// Flags text/background class pairs below the AA contrast threshold.
#[derive(Debug, Clone, Default)]
pub struct ColorContrast;

impl ColorContrast {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ColorContrast {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Text and background utility colors must meet WCAG AA contrast"
    }

    fn check(&self, ctx: &FileContext, parsed: &ParseResult) -> Vec<Violation> {
        let mut violations = Vec::new();

        for element in &parsed.elements {
            let Some(classes) = element
                .attribute("className")
                .and_then(|v| v.as_literal_str())
            else {
                continue;
            };

            let colors = extract_colors(classes);
            let typography = extract_typography(classes);
            let result = check_text_contrast(
                colors.foreground.map(|c| c.rgb),
                colors.background.map(|c| c.rgb),
                &typography.font_size(),
                &typography.font_weight(),
            );
            trace!(line = element.line, outcome = result.message(), "contrast");

            if result.valid() != Some(false) {
                continue;
            }

            let mut violation = Violation::new(
                ID,
                Severity::High,
                ctx.location(element.line, 0),
                result.message(),
                WCAG_REF,
            )
            .with_code(ctx.line_text(element.line));

            let suggestions =
                suggest_tokens(colors.foreground.as_ref(), colors.background.as_ref());
            if !suggestions.is_empty() {
                violation = violation.with_suggestion(Suggestion::new(suggestions.join("; ")));
            }
            violations.push(violation);
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use wcag_lint_core::{AttributeValue, Element};

    fn check(class_name: &str) -> Vec<Violation> {
        let ctx = FileContext::new(Path::new("c.tsx"), "<p />", Path::new("."));
        let parsed = ParseResult::new(
            "c.tsx",
            vec![Element::new("p", 1)
                .with_attribute("className", AttributeValue::Str(class_name.to_string()))],
            Vec::new(),
        );
        ColorContrast::new().check(&ctx, &parsed)
    }

    #[test]
    fn light_gray_on_white_fails() {
        let found = check("text-gray-400 bg-white p-4");
        assert_eq!(found.len(), 1);
        assert!(found[0].message.starts_with("Fails WCAG AA ("));
        assert!(found[0].message.ends_with(", needs 4.5:1)"));
        let suggestion = found[0].suggestion.as_ref().map(|s| s.message.as_str());
        assert_eq!(
            suggestion,
            Some("Try text-gray-700 or text-gray-800 for better contrast")
        );
    }

    #[test]
    fn dark_text_passes() {
        assert!(check("text-gray-900 bg-white").is_empty());
    }

    #[test]
    fn missing_background_is_not_a_finding() {
        assert!(check("text-gray-400").is_empty());
    }

    #[test]
    fn expression_class_names_are_skipped() {
        let ctx = FileContext::new(Path::new("c.tsx"), "<p />", Path::new("."));
        let parsed = ParseResult::new(
            "c.tsx",
            vec![Element::new("p", 1).with_attribute("className", AttributeValue::Expression)],
            Vec::new(),
        );
        assert!(ColorContrast::new().check(&ctx, &parsed).is_empty());
    }
}
