//! Rule flagging images with no `alt` attribute.
//!
//! `alt=""` marks a decorative image and passes; only a missing key is a
//! finding.

use wcag_lint_core::{query, FileContext, ParseResult, Rule, Severity, Suggestion, Violation};

/// Rule id for image-alt.
pub const ID: &str = "image-alt";

/// Rule name for image-alt.
pub const NAME: &str = "Image Alt";

const WCAG_REF: &str = "1.1.1 Non-text Content (Level A)";

/// Flags `img` elements without an `alt` attribute.
#[derive(Debug, Clone, Default)]
pub struct ImageAlt;

impl ImageAlt {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ImageAlt {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Images must carry an alt attribute"
    }

    fn check(&self, ctx: &FileContext, parsed: &ParseResult) -> Vec<Violation> {
        query::images_without_alt(parsed)
            .into_iter()
            .map(|element| {
                Violation::new(
                    ID,
                    Severity::Critical,
                    ctx.location(element.line, 0),
                    "Image has no alt attribute",
                    WCAG_REF,
                )
                .with_code(ctx.line_text(element.line))
                .with_suggestion(Suggestion::new(
                    "Describe the image in alt, or use alt=\"\" if it is decorative",
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
    fn decorative_image_passes() {
        let source = "<img src={logo} />\n<img alt=\"\" src={bg} />";
        let ctx = FileContext::new(Path::new("i.tsx"), source, Path::new("."));
        let parsed = ParseResult::new(
            "i.tsx",
            vec![
                Element::new("img", 1).with_attribute("src", AttributeValue::Expression),
                Element::new("img", 2).with_attribute("alt", AttributeValue::Str(String::new())),
            ],
            Vec::new(),
        );

        let found = ImageAlt::new().check(&ctx, &parsed);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, Severity::Critical);
        assert_eq!(found[0].code, "<img src={logo} />");
    }
}
