//! Rule trait for defining accessibility checks.

use crate::context::FileContext;
use crate::model::ParseResult;
use crate::types::Violation;

/// A per-file accessibility rule.
///
/// Rules receive both the raw file context and the parsed element model.
/// Line-oriented rules read [`FileContext::lines`]; structural rules walk
/// [`ParseResult::elements`]. Every finding carries the rule's [`id`] so
/// configuration can enable or disable it.
///
/// [`id`]: Rule::id
///
/// # Example
///
/// ```ignore
/// use wcag_lint_core::{FileContext, ParseResult, Rule, Severity, Violation};
///
/// pub struct NoMarquee;
///
/// impl Rule for NoMarquee {
///     fn id(&self) -> &'static str { "no-marquee" }
///     fn name(&self) -> &'static str { "No marquee" }
///
///     fn check(&self, ctx: &FileContext, parsed: &ParseResult) -> Vec<Violation> {
///         parsed
///             .elements
///             .iter()
///             .filter(|e| e.is_type("marquee"))
///             .map(|e| {
///                 Violation::new(
///                     self.id(),
///                     Severity::High,
///                     ctx.location(e.line, 0),
///                     "Moving content cannot be paused",
///                     "2.2.2 Pause, Stop, Hide (Level A)",
///                 )
///             })
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case id of this rule (e.g., "form-labels").
    fn id(&self) -> &'static str;

    /// Returns a human-readable name.
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks a single file and returns any findings.
    fn check(&self, ctx: &FileContext, parsed: &ParseResult) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;
    use crate::types::Severity;
    use std::path::Path;

    struct NoMarquee;

    impl Rule for NoMarquee {
        fn id(&self) -> &'static str {
            "no-marquee"
        }
        fn name(&self) -> &'static str {
            "No marquee"
        }

        fn check(&self, ctx: &FileContext, parsed: &ParseResult) -> Vec<Violation> {
            parsed
                .elements
                .iter()
                .filter(|e| e.is_type("marquee"))
                .map(|e| {
                    Violation::new(
                        self.id(),
                        Severity::High,
                        ctx.location(e.line, 0),
                        "Moving content cannot be paused",
                        "2.2.2 Pause, Stop, Hide (Level A)",
                    )
                    .with_code(ctx.line_text(e.line))
                })
                .collect()
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = NoMarquee;
        assert_eq!(rule.id(), "no-marquee");
        assert_eq!(rule.description(), "");

        let content = "<div>\n  <marquee>hi</marquee>\n</div>";
        let ctx = FileContext::new(Path::new("a.tsx"), content, Path::new("."));
        let parsed = ParseResult::new(
            "a.tsx",
            vec![Element::new("div", 1), Element::new("marquee", 2)],
            Vec::new(),
        );
        let found = rule.check(&ctx, &parsed);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].location.line, 2);
        assert_eq!(found[0].code, "<marquee>hi</marquee>");
    }
}
