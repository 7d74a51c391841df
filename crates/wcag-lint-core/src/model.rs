//! Element model produced by source parsers.
//!
//! A [`ParseResult`] is the unit every structural rule works on: a flat,
//! document-ordered list of markup elements plus the heading and landmark
//! indexes derived from it. Parsers implement [`SourceParser`]; this crate
//! stays independent of any concrete grammar.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Attribute key recorded for a spread attribute (`{...props}`).
pub const SPREAD_KEY: &str = "...spread";

/// Literal token standing in for an attribute expression that static
/// analysis cannot resolve.
pub const EXPRESSION_TOKEN: &str = "{expression}";

/// Element types that count as landmark regions.
pub const LANDMARK_TYPES: &[&str] = &[
    "header", "nav", "main", "aside", "footer", "section", "article",
];

/// Resolved value of a markup attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// String literal, e.g. `alt="Logo"` or `alt={"Logo"}`.
    Str(String),
    /// Boolean literal, or `true` for a value-less attribute (`disabled`).
    Bool(bool),
    /// Numeric literal, e.g. `tabIndex={0}`.
    Number(f64),
    /// Any other embedded expression.
    Expression,
    /// A value form with no scalar meaning (e.g. an element as value).
    Null,
}

impl AttributeValue {
    /// Returns the string form for string literals and unresolved expressions.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Expression => Some(EXPRESSION_TOKEN),
            Self::Bool(_) | Self::Number(_) | Self::Null => None,
        }
    }

    /// Returns the literal string, ignoring unresolved expressions.
    #[must_use]
    pub fn as_literal_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// One markup node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Lowercased tag name, `Namespace.Member` for compound references,
    /// or `"unknown"`.
    pub element_type: String,
    /// Attributes keyed by name.
    pub attributes: BTreeMap<String, AttributeValue>,
    /// Line of the opening tag (1-indexed).
    pub line: usize,
    /// Whether the element has any child node.
    pub has_children: bool,
    /// Whether the element is written `<tag />`.
    pub self_closing: bool,
}

impl Element {
    /// Creates an element with no attributes.
    #[must_use]
    pub fn new(element_type: impl Into<String>, line: usize) -> Self {
        Self {
            element_type: element_type.into(),
            attributes: BTreeMap::new(),
            line,
            has_children: false,
            self_closing: false,
        }
    }

    /// Adds an attribute (builder style, mostly for tests).
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Marks the element as having children.
    #[must_use]
    pub fn with_children(mut self) -> Self {
        self.has_children = true;
        self
    }

    /// Case-insensitive type comparison.
    #[must_use]
    pub fn is_type(&self, element_type: &str) -> bool {
        self.element_type.eq_ignore_ascii_case(element_type)
    }

    /// Case-insensitive membership in a set of types.
    #[must_use]
    pub fn is_any_type(&self, types: &[&str]) -> bool {
        types.iter().any(|t| self.is_type(t))
    }

    /// Key membership test.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Looks up an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Whether `aria-label` or `aria-labelledby` is present.
    #[must_use]
    pub fn has_accessible_name(&self) -> bool {
        self.has_attribute("aria-label") || self.has_attribute("aria-labelledby")
    }

    /// Heading level for `h1`..`h6` (case-insensitive), otherwise `None`.
    #[must_use]
    pub fn heading_level(&self) -> Option<u8> {
        match self.element_type.as_bytes() {
            [b'h' | b'H', d @ b'1'..=b'6'] => Some(d - b'0'),
            _ => None,
        }
    }

    /// Lowercased landmark type, if this element is a landmark.
    #[must_use]
    pub fn landmark(&self) -> Option<String> {
        let lower = self.element_type.to_ascii_lowercase();
        LANDMARK_TYPES.contains(&lower.as_str()).then_some(lower)
    }
}

/// How a component was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// `function Foo() {}`
    Function,
    /// `const Foo = () => {}` or `const Foo = function () {}`
    Arrow,
}

/// A callable recognized as a UI component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDecl {
    /// Declared name, or `"Anonymous"`.
    pub name: String,
    /// Declaration form.
    pub kind: ComponentKind,
    /// Line of the declaration (1-indexed).
    pub line: usize,
}

/// Full structural analysis of one source file.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Logical path of the file.
    pub file_path: PathBuf,
    /// Every markup element, in document order.
    pub elements: Vec<Element>,
    /// Component declarations.
    pub components: Vec<ComponentDecl>,
    /// `h1`..`h6` elements, in document order.
    pub headings: Vec<Element>,
    /// Lowercased landmark element types present in the file.
    pub landmarks: BTreeSet<String>,
}

impl ParseResult {
    /// Builds a result and derives the heading and landmark indexes.
    #[must_use]
    pub fn new(
        file_path: impl Into<PathBuf>,
        elements: Vec<Element>,
        components: Vec<ComponentDecl>,
    ) -> Self {
        let headings = elements
            .iter()
            .filter(|e| e.heading_level().is_some())
            .cloned()
            .collect();
        let landmarks = elements.iter().filter_map(Element::landmark).collect();

        Self {
            file_path: file_path.into(),
            elements,
            components,
            headings,
            landmarks,
        }
    }
}

/// Malformed source that could not be turned into an element model.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("Parse error in {}:{line}:{column}: {message}", .path.display())]
#[diagnostic(
    code(wcag_lint::parse_error),
    help("the file is skipped; other files are still scanned")
)]
pub struct ParseError {
    /// File that failed to parse.
    pub path: PathBuf,
    /// Line of the first syntax error (1-indexed).
    pub line: usize,
    /// Column of the first syntax error (1-indexed).
    pub column: usize,
    /// Parser message.
    pub message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("{message}")]
    span: SourceSpan,
}

impl ParseError {
    /// Creates a parse error pointing at a byte range of `source`.
    #[must_use]
    pub fn new(
        path: &Path,
        source: &str,
        (line, column): (usize, usize),
        (offset, length): (usize, usize),
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.to_path_buf(),
            line,
            column,
            message: message.into(),
            source_code: NamedSource::new(path.display().to_string(), source.to_owned()),
            span: SourceSpan::from((offset, length)),
        }
    }
}

/// A parser that turns one markup source dialect into a [`ParseResult`].
///
/// Implement this to add a new dialect; register it on the analyzer with
/// [`crate::AnalyzerBuilder::parser`].
pub trait SourceParser: Send + Sync {
    /// Dialect identifier (e.g., `"tsx"`).
    fn dialect(&self) -> &'static str;

    /// File extensions this parser handles, without the dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Parses source text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the source is not syntactically valid.
    fn parse(&self, source: &str, path: &Path) -> Result<ParseResult, ParseError>;

    /// Whether this parser handles the given path.
    fn handles(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// Type alias for boxed parser trait objects.
pub type ParserBox = Box<dyn SourceParser>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_is_case_insensitive() {
        assert_eq!(Element::new("h1", 1).heading_level(), Some(1));
        assert_eq!(Element::new("H6", 1).heading_level(), Some(6));
        assert_eq!(Element::new("h7", 1).heading_level(), None);
        assert_eq!(Element::new("header", 1).heading_level(), None);
        assert_eq!(Element::new("h", 1).heading_level(), None);
    }

    #[test]
    fn derives_headings_and_landmarks_in_document_order() {
        let result = ParseResult::new(
            "page.tsx",
            vec![
                Element::new("header", 1),
                Element::new("h2", 2),
                Element::new("div", 3),
                Element::new("Main", 4),
                Element::new("h1", 5),
            ],
            Vec::new(),
        );
        let heading_types: Vec<&str> = result
            .headings
            .iter()
            .map(|h| h.element_type.as_str())
            .collect();
        assert_eq!(heading_types, vec!["h2", "h1"]);
        assert!(result.landmarks.contains("header"));
        assert!(result.landmarks.contains("main"));
        assert_eq!(result.landmarks.len(), 2);
    }

    #[test]
    fn expression_token_is_visible_as_str() {
        assert_eq!(AttributeValue::Expression.as_str(), Some("{expression}"));
        assert_eq!(AttributeValue::Expression.as_literal_str(), None);
        assert_eq!(AttributeValue::Bool(true).as_str(), None);
    }

    #[test]
    fn accessible_name_checks_both_aria_keys() {
        let labelled = Element::new("button", 1)
            .with_attribute("aria-labelledby", AttributeValue::Str("x".into()));
        assert!(labelled.has_accessible_name());
        assert!(!Element::new("button", 1).has_accessible_name());
    }

    #[test]
    fn parse_error_display_names_location() {
        let err = ParseError::new(
            Path::new("Broken.tsx"),
            "const x = <div>;\n",
            (1, 11),
            (10, 5),
            "unexpected token",
        );
        assert_eq!(
            err.to_string(),
            "Parse error in Broken.tsx:1:11: unexpected token"
        );
    }
}
