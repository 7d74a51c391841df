//! Line-oriented pattern rules.
//!
//! Each rule groups several [`PatternCheck`]s. Every source line is tested
//! against every check of an enabled rule; a match yields one finding
//! carrying the trimmed line as its code. A line may trigger several
//! checks and several rules.
//!
//! # Exclusions
//!
//! A check's `unless` patterns are tested against the rest of the matched
//! opening tag, from the start of the match up to the next `>` (or the end
//! of the line). Any hit suppresses that match, so
//! `<div role="button" onClick={open}>` is not an interactive-div finding
//! no matter where `role` appears in the tag.

use regex::{Regex, RegexBuilder};
use thiserror::Error;
use wcag_lint_core::{FileContext, ParseResult, Rule, Severity, Violation};

const NAME_ROLE_VALUE: &str = "4.1.2 Name, Role, Value (Level A)";
const FOCUS_ORDER: &str = "2.4.3 Focus Order (Level A)";
const KEYBOARD: &str = "2.1.1 Keyboard (Level A)";
const LABELS_OR_INSTRUCTIONS: &str = "3.3.2 Labels or Instructions (Level A)";
const NON_TEXT_CONTENT: &str = "1.1.1 Non-text Content (Level A)";
const INFO_AND_RELATIONSHIPS: &str = "1.3.1 Info and Relationships (Level A)";

/// One pattern and the finding it produces.
#[derive(Debug, Clone, Copy)]
pub struct PatternCheck {
    /// Case-insensitive regular expression matched against a line.
    pub pattern: &'static str,
    /// Patterns that suppress a match when found in the rest of its tag.
    pub unless: &'static [&'static str],
    /// Finding message.
    pub message: &'static str,
    /// WCAG success criterion.
    pub wcag_ref: &'static str,
    /// Finding severity.
    pub severity: Severity,
}

/// A named group of checks, enabled and disabled as one rule.
#[derive(Debug, Clone, Copy)]
pub struct PatternRuleDef {
    /// Rule id used in configuration and findings.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Brief description.
    pub description: &'static str,
    /// Checks run for every line.
    pub checks: &'static [PatternCheck],
}

/// The built-in pattern catalog.
pub const CATALOG: &[PatternRuleDef] = &[
    PatternRuleDef {
        id: "semantic-html",
        name: "Semantic HTML",
        description: "Flags generic containers used as buttons or links",
        checks: &[
            PatternCheck {
                pattern: r"<div\b[^>]*onClick",
                unless: &["role="],
                message: r#"Interactive div should use <button> or have role="button""#,
                wcag_ref: NAME_ROLE_VALUE,
                severity: Severity::High,
            },
            PatternCheck {
                pattern: r"<span\b[^>]*onClick",
                unless: &["role="],
                message: r#"Interactive span should use <button> or have role="button""#,
                wcag_ref: NAME_ROLE_VALUE,
                severity: Severity::High,
            },
            PatternCheck {
                pattern: r"<div\b[^>]*href=",
                unless: &[],
                message: "Div with href should use <a> element instead",
                wcag_ref: NAME_ROLE_VALUE,
                severity: Severity::High,
            },
        ],
    },
    PatternRuleDef {
        id: "aria-attributes",
        name: "ARIA Attributes",
        description: "Flags misspelled and empty ARIA attributes",
        checks: &[
            PatternCheck {
                pattern: r"aria-labeledby=",
                unless: &[],
                message: r#"Use aria-labelledby (double "l") not aria-labeledby"#,
                wcag_ref: NAME_ROLE_VALUE,
                severity: Severity::Medium,
            },
            PatternCheck {
                pattern: r#"<[^>]*aria-label=""\s*[^>]*>"#,
                unless: &[],
                message: "Empty aria-label provides no information",
                wcag_ref: NAME_ROLE_VALUE,
                severity: Severity::Medium,
            },
        ],
    },
    PatternRuleDef {
        id: "keyboard-navigation",
        name: "Keyboard Navigation",
        description: "Flags positive tab order and click handlers without key handlers",
        checks: &[
            PatternCheck {
                pattern: r#"tabIndex=["']?[1-9]\d*["']?"#,
                unless: &[],
                message: "Avoid positive tabIndex values (use 0 or -1)",
                wcag_ref: FOCUS_ORDER,
                severity: Severity::High,
            },
            PatternCheck {
                pattern: r"<div\b[^>]*onClick",
                unless: &["onKeyDown", "onKeyPress"],
                message: "Interactive div needs keyboard handler (onKeyDown)",
                wcag_ref: KEYBOARD,
                severity: Severity::High,
            },
        ],
    },
    PatternRuleDef {
        id: "form-labels",
        name: "Form Labels",
        description: "Flags form controls without an associated label",
        checks: &[
            PatternCheck {
                pattern: r"<input\b",
                unless: &["aria-label", "aria-labelledby", "id="],
                message: "Input needs associated label (id + htmlFor) or aria-label",
                wcag_ref: LABELS_OR_INSTRUCTIONS,
                severity: Severity::High,
            },
            PatternCheck {
                pattern: r#"<input\b[^>]*placeholder="[^"]*""#,
                unless: &["aria-label", "id="],
                message: "Placeholder is not a substitute for a label",
                wcag_ref: LABELS_OR_INSTRUCTIONS,
                severity: Severity::Medium,
            },
            PatternCheck {
                pattern: r"<select\b",
                unless: &["aria-label", "aria-labelledby", "id="],
                message: "Select needs associated label or aria-label",
                wcag_ref: LABELS_OR_INSTRUCTIONS,
                severity: Severity::High,
            },
            PatternCheck {
                pattern: r"<textarea\b",
                unless: &["aria-label", "aria-labelledby", "id="],
                message: "Textarea needs associated label or aria-label",
                wcag_ref: LABELS_OR_INSTRUCTIONS,
                severity: Severity::High,
            },
        ],
    },
    PatternRuleDef {
        id: "alt-text",
        name: "Alternative Text",
        description: "Flags images and icon buttons without a text alternative",
        checks: &[
            PatternCheck {
                pattern: r"<img\b",
                unless: &["alt="],
                message: r#"Image must have alt attribute (use alt="" for decorative images)"#,
                wcag_ref: NON_TEXT_CONTENT,
                severity: Severity::Critical,
            },
            PatternCheck {
                pattern: r#"<img\b[^>]*alt="image"[^>]*>"#,
                unless: &[],
                message: r#"Alt text "image" is not descriptive"#,
                wcag_ref: NON_TEXT_CONTENT,
                severity: Severity::Medium,
            },
            PatternCheck {
                pattern: r#"<img\b[^>]*alt="photo"[^>]*>"#,
                unless: &[],
                message: r#"Alt text "photo" is not descriptive"#,
                wcag_ref: NON_TEXT_CONTENT,
                severity: Severity::Medium,
            },
            PatternCheck {
                pattern: r"<button\b[^>]*>\s*<[^>]*/>[^<]*</button>",
                unless: &[],
                message: "Icon-only button needs aria-label",
                wcag_ref: NAME_ROLE_VALUE,
                severity: Severity::High,
            },
        ],
    },
    PatternRuleDef {
        id: "heading-hierarchy",
        name: "Heading Hierarchy",
        description: "Flags headings sized with utility classes",
        checks: &[PatternCheck {
            pattern: r#"<h[1-6]\b[^>]*className="[^"]*text-"#,
            unless: &[],
            message: "Use semantic heading levels, not className for sizing",
            wcag_ref: INFO_AND_RELATIONSHIPS,
            severity: Severity::Low,
        }],
    },
];

/// A catalog pattern that failed to compile.
#[derive(Debug, Error)]
#[error("invalid pattern in rule '{rule}': {source}")]
pub struct PatternError {
    /// Id of the rule owning the pattern.
    pub rule: &'static str,
    /// Underlying regex error.
    #[source]
    pub source: regex::Error,
}

#[derive(Debug)]
struct CompiledCheck {
    check: &'static PatternCheck,
    pattern: Regex,
    unless: Vec<Regex>,
}

impl CompiledCheck {
    fn compile(rule: &'static str, check: &'static PatternCheck) -> Result<Self, PatternError> {
        let build = |pattern: &str| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| PatternError { rule, source })
        };

        Ok(Self {
            check,
            pattern: build(check.pattern)?,
            unless: check
                .unless
                .iter()
                .map(|p| build(p))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Byte column (0-based) of the first unsuppressed match.
    fn first_match(&self, line: &str) -> Option<usize> {
        self.pattern
            .find_iter(line)
            .map(|m| m.start())
            .find(|&start| !self.suppressed(tag_remainder(line, start)))
    }

    fn suppressed(&self, region: &str) -> bool {
        self.unless.iter().any(|re| re.is_match(region))
    }
}

/// Text from `start` up to, not including, the next `>`.
fn tag_remainder(line: &str, start: usize) -> &str {
    let rest = &line[start..];
    rest.find('>').map_or(rest, |end| &rest[..end])
}

/// A compiled catalog rule.
#[derive(Debug)]
pub struct PatternRule {
    def: &'static PatternRuleDef,
    checks: Vec<CompiledCheck>,
}

impl PatternRule {
    /// Compiles every check of a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if a pattern is not a valid regex.
    pub fn new(def: &'static PatternRuleDef) -> Result<Self, PatternError> {
        let checks = def
            .checks
            .iter()
            .map(|check| CompiledCheck::compile(def.id, check))
            .collect::<Result<_, _>>()?;
        Ok(Self { def, checks })
    }

    /// Looks up and compiles a catalog rule by id.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if a pattern is not a valid regex.
    pub fn by_id(id: &str) -> Result<Option<Self>, PatternError> {
        CATALOG
            .iter()
            .find(|def| def.id == id)
            .map(Self::new)
            .transpose()
    }

    /// Checks contributing to this rule.
    #[must_use]
    pub fn checks(&self) -> &'static [PatternCheck] {
        self.def.checks
    }
}

impl Rule for PatternRule {
    fn id(&self) -> &'static str {
        self.def.id
    }

    fn name(&self) -> &'static str {
        self.def.name
    }

    fn description(&self) -> &'static str {
        self.def.description
    }

    fn check(&self, ctx: &FileContext, _parsed: &ParseResult) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (line_no, line) in ctx.lines() {
            for compiled in &self.checks {
                let Some(column) = compiled.first_match(line) else {
                    continue;
                };
                let check = compiled.check;
                violations.push(
                    Violation::new(
                        self.def.id,
                        check.severity,
                        ctx.location(line_no, column + 1),
                        check.message,
                        check.wcag_ref,
                    )
                    .with_code(line.trim()),
                );
            }
        }

        violations
    }
}

/// Compiles the whole catalog, in catalog order.
///
/// # Errors
///
/// Returns the first [`PatternError`] encountered.
pub fn pattern_rules() -> Result<Vec<PatternRule>, PatternError> {
    CATALOG.iter().map(PatternRule::new).collect()
}
