//! Rule flagging clickable generic containers that expose no role.
//!
//! A `<div>` or `<span>` with an `onClick` handler is invisible to assistive
//! technology as a control unless it declares a `role`.

use wcag_lint_core::{query, FileContext, ParseResult, Rule, Severity, Suggestion, Violation};

/// Rule id for interactive-role.
pub const ID: &str = "interactive-role";

/// Rule name for interactive-role.
pub const NAME: &str = "Interactive Role";

const WCAG_REF: &str = "4.1.2 Name, Role, Value (Level A)";

/// Flags `div`/`span` elements with a click handler and no `role`.
#[derive(Debug, Clone)]
pub struct InteractiveRole {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for InteractiveRole {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveRole {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::High,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for InteractiveRole {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Clickable div/span elements must declare a role"
    }

    fn check(&self, ctx: &FileContext, parsed: &ParseResult) -> Vec<Violation> {
        query::interactive_without_role(parsed)
            .into_iter()
            .map(|element| {
                Violation::new(
                    ID,
                    self.severity,
                    ctx.location(element.line, 0),
                    format!(
                        "Clickable <{}> has no role; use <button> or add role=\"button\"",
                        element.element_type
                    ),
                    WCAG_REF,
                )
                .with_code(ctx.line_text(element.line))
                .with_suggestion(Suggestion::new(
                    "Replace with <button type=\"button\"> or add role and tabIndex={0}",
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
    fn reports_each_clickable_container() {
        let source = "<div onClick={a}>\n<span onClick={b} role=\"link\">x</span>\n</div>";
        let ctx = FileContext::new(Path::new("a.tsx"), source, Path::new("."));
        let parsed = ParseResult::new(
            "a.tsx",
            vec![
                Element::new("div", 1).with_attribute("onClick", AttributeValue::Expression),
                Element::new("span", 2)
                    .with_attribute("onClick", AttributeValue::Expression)
                    .with_attribute("role", AttributeValue::Str("link".into())),
            ],
            Vec::new(),
        );

        let found = InteractiveRole::new().check(&ctx, &parsed);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].rule, ID);
        assert_eq!(found[0].location.line, 1);
        assert_eq!(found[0].code, "<div onClick={a}>");
        assert_eq!(found[0].severity, Severity::High);
    }

    #[test]
    fn severity_is_configurable() {
        let rule = InteractiveRole::new().severity(Severity::Medium);
        assert_eq!(rule.severity, Severity::Medium);
    }
}
