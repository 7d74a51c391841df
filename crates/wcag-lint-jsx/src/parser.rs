//! JSX/TSX element extraction using Tree-sitter.

use std::path::Path;
use tracing::debug;
use tree_sitter::{Language, Node, Parser};
use wcag_lint_core::{
    AttributeValue, ComponentDecl, ComponentKind, Element, ParseError, ParseResult, SourceParser,
    SPREAD_KEY,
};

use crate::syntax::{text, ElementName, SyntaxKind};

/// Grammar used for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    /// TypeScript with JSX (`.tsx`).
    Tsx,
    /// JavaScript with JSX (`.jsx`).
    Jsx,
}

/// Extracts markup elements and component declarations from JSX-family source.
pub struct JsxParser {
    dialect: Dialect,
    language: Language,
}

impl JsxParser {
    /// Parser for `.tsx` files.
    #[must_use]
    pub fn tsx() -> Self {
        Self {
            dialect: Dialect::Tsx,
            language: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Parser for `.jsx` files.
    #[must_use]
    pub fn jsx() -> Self {
        Self {
            dialect: Dialect::Jsx,
            language: tree_sitter_javascript::LANGUAGE.into(),
        }
    }
}

impl SourceParser for JsxParser {
    fn dialect(&self) -> &'static str {
        match self.dialect {
            Dialect::Tsx => "tsx",
            Dialect::Jsx => "jsx",
        }
    }

    fn extensions(&self) -> &'static [&'static str] {
        match self.dialect {
            Dialect::Tsx => &["tsx"],
            Dialect::Jsx => &["jsx"],
        }
    }

    fn parse(&self, source: &str, path: &Path) -> Result<ParseResult, ParseError> {
        let mut parser = Parser::new();
        parser.set_language(&self.language).map_err(|e| {
            ParseError::new(path, source, (1, 1), (0, 0), format!("grammar unavailable: {e}"))
        })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::new(path, source, (1, 1), (0, 0), "parser produced no tree"))?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(syntax_error(root, source, path));
        }

        let src = source.as_bytes();
        let elements = collect_elements(root, src);
        let components = collect_components(root, src);

        debug!(
            "{}: {} element(s), {} component(s)",
            path.display(),
            elements.len(),
            components.len()
        );

        Ok(ParseResult::new(path, elements, components))
    }
}

fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// First `ERROR` or missing node in document order.
fn syntax_error(root: Node<'_>, source: &str, path: &Path) -> ParseError {
    let mut stack = vec![root];
    let mut culprit = root;
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            culprit = node;
            break;
        }
        if node.has_error() {
            let mut cursor = node.walk();
            let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }
    }

    let message = if culprit.is_missing() {
        format!("missing `{}`", culprit.kind())
    } else {
        let snippet: String = text(&culprit, source.as_bytes())
            .lines()
            .next()
            .unwrap_or("")
            .chars()
            .take(24)
            .collect();
        if snippet.trim().is_empty() {
            "syntax error".to_string()
        } else {
            format!("unexpected `{}`", snippet.trim())
        }
    };

    let position = culprit.start_position();
    ParseError::new(
        path,
        source,
        (position.row + 1, position.column + 1),
        (culprit.start_byte(), culprit.end_byte() - culprit.start_byte()),
        message,
    )
}

/// Pre-order walk collecting every markup element in document order.
fn collect_elements(root: Node<'_>, src: &[u8]) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        match SyntaxKind::of(&node) {
            SyntaxKind::JsxElement => {
                if let Some(open) = node.child_by_field_name("open_tag") {
                    if let Some(name) = ElementName::of_tag(&open, src) {
                        let has_children =
                            named_children(&node).iter().any(|c| is_content(c, src));
                        elements.push(build_element(&open, name, has_children, false, src));
                    }
                }
            }
            SyntaxKind::JsxSelfClosingElement => {
                if let Some(name) = ElementName::of_tag(&node, src) {
                    elements.push(build_element(&node, name, false, true, src));
                }
            }
            _ => {}
        }

        stack.extend(named_children(&node).into_iter().rev());
    }

    elements
}

/// Whether a child of `jsx_element` counts as content.
///
/// Whitespace-only text does not.
fn is_content(child: &Node<'_>, src: &[u8]) -> bool {
    match SyntaxKind::of(child) {
        SyntaxKind::JsxOpeningElement | SyntaxKind::JsxClosingElement => false,
        SyntaxKind::JsxText => !text(child, src).trim().is_empty(),
        _ => true,
    }
}

fn build_element(
    tag: &Node<'_>,
    name: ElementName<'_>,
    has_children: bool,
    self_closing: bool,
    src: &[u8],
) -> Element {
    let mut element = Element::new(name.element_type(), tag.start_position().row + 1);
    element.has_children = has_children;
    element.self_closing = self_closing;

    for child in named_children(tag) {
        match SyntaxKind::of(&child) {
            SyntaxKind::JsxAttribute => {
                if let Some((key, value)) = attribute(&child, src) {
                    element.attributes.insert(key, value);
                }
            }
            SyntaxKind::JsxExpression => {
                let is_spread = named_children(&child)
                    .iter()
                    .any(|c| SyntaxKind::of(c) == SyntaxKind::SpreadElement);
                if is_spread {
                    element
                        .attributes
                        .insert(SPREAD_KEY.to_string(), AttributeValue::Bool(true));
                }
            }
            _ => {}
        }
    }

    element
}

fn attribute(node: &Node<'_>, src: &[u8]) -> Option<(String, AttributeValue)> {
    let mut parts = named_children(node)
        .into_iter()
        .filter(|c| SyntaxKind::of(c) != SyntaxKind::Comment);
    let name = parts.next()?;
    let value = match parts.next() {
        None => AttributeValue::Bool(true),
        Some(value) => attribute_value(&value, src),
    };
    Some((text(&name, src).to_string(), value))
}

fn attribute_value(node: &Node<'_>, src: &[u8]) -> AttributeValue {
    match SyntaxKind::of(node) {
        SyntaxKind::String => AttributeValue::Str(unquote(text(node, src)).to_string()),
        SyntaxKind::JsxExpression => expression_value(node, src),
        _ => AttributeValue::Null,
    }
}

/// Resolves literal contents of a `{...}` container.
fn expression_value(container: &Node<'_>, src: &[u8]) -> AttributeValue {
    let mut inner = named_children(container)
        .into_iter()
        .find(|c| SyntaxKind::of(c) != SyntaxKind::Comment);

    while let Some(node) = inner {
        if SyntaxKind::of(&node) != SyntaxKind::ParenthesizedExpression {
            break;
        }
        inner = named_children(&node)
            .into_iter()
            .find(|c| SyntaxKind::of(c) != SyntaxKind::Comment);
    }

    let Some(node) = inner else {
        return AttributeValue::Expression;
    };

    match SyntaxKind::of(&node) {
        SyntaxKind::String => AttributeValue::Str(unquote(text(&node, src)).to_string()),
        SyntaxKind::True => AttributeValue::Bool(true),
        SyntaxKind::False => AttributeValue::Bool(false),
        SyntaxKind::Number => {
            parse_number(text(&node, src)).map_or(AttributeValue::Expression, AttributeValue::Number)
        }
        _ => AttributeValue::Expression,
    }
}

fn unquote(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = raw
            .strip_prefix(quote)
            .and_then(|r| r.strip_suffix(quote))
        {
            return inner;
        }
    }
    raw
}

#[allow(clippy::cast_precision_loss)]
fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.replace('_', "");
    let lower = cleaned.to_ascii_lowercase();
    let radix = |prefix: &str, radix: u32| {
        lower
            .strip_prefix(prefix)
            .and_then(|digits| u64::from_str_radix(digits, radix).ok())
            .map(|n| n as f64)
    };
    radix("0x", 16)
        .or_else(|| radix("0o", 8))
        .or_else(|| radix("0b", 2))
        .or_else(|| lower.parse().ok())
}

/// Top-level declarations whose body produces markup.
fn collect_components(root: Node<'_>, src: &[u8]) -> Vec<ComponentDecl> {
    let mut components = Vec::new();
    for node in named_children(&root) {
        declaration_components(node, src, &mut components);
    }
    components
}

fn declaration_components(node: Node<'_>, src: &[u8], out: &mut Vec<ComponentDecl>) {
    match SyntaxKind::of(&node) {
        SyntaxKind::FunctionDeclaration => {
            if returns_markup(node) {
                out.push(ComponentDecl {
                    name: field_text(&node, "name", src).unwrap_or("Anonymous").to_string(),
                    kind: ComponentKind::Function,
                    line: node.start_position().row + 1,
                });
            }
        }
        SyntaxKind::LexicalDeclaration | SyntaxKind::VariableDeclaration => {
            for declarator in named_children(&node) {
                if SyntaxKind::of(&declarator) != SyntaxKind::VariableDeclarator {
                    continue;
                }
                let Some(value) = declarator.child_by_field_name("value") else {
                    continue;
                };
                if is_callable(&value) && returns_markup(value) {
                    let name = declarator
                        .child_by_field_name("name")
                        .filter(|n| SyntaxKind::of(n) == SyntaxKind::Identifier)
                        .map_or("Anonymous", |n| text(&n, src));
                    out.push(ComponentDecl {
                        name: name.to_string(),
                        kind: ComponentKind::Arrow,
                        line: declarator.start_position().row + 1,
                    });
                }
            }
        }
        SyntaxKind::ExportStatement => {
            if let Some(declaration) = node.child_by_field_name("declaration") {
                declaration_components(declaration, src, out);
            } else if let Some(value) = node.child_by_field_name("value") {
                if is_callable(&value) && returns_markup(value) {
                    let kind = if SyntaxKind::of(&value) == SyntaxKind::ArrowFunction {
                        ComponentKind::Arrow
                    } else {
                        ComponentKind::Function
                    };
                    out.push(ComponentDecl {
                        name: field_text(&value, "name", src)
                            .unwrap_or("Anonymous")
                            .to_string(),
                        kind,
                        line: node.start_position().row + 1,
                    });
                }
            }
        }
        _ => {}
    }
}

fn is_callable(node: &Node<'_>) -> bool {
    matches!(
        SyntaxKind::of(node),
        SyntaxKind::ArrowFunction | SyntaxKind::FunctionExpression
    )
}

fn field_text<'a>(node: &Node<'_>, field: &str, src: &'a [u8]) -> Option<&'a str> {
    node.child_by_field_name(field).map(|n| text(&n, src))
}

fn is_markup(node: &Node<'_>) -> bool {
    match SyntaxKind::of(node) {
        SyntaxKind::JsxSelfClosingElement => true,
        SyntaxKind::JsxElement => node
            .child_by_field_name("open_tag")
            .is_some_and(|open| open.child_by_field_name("name").is_some()),
        _ => false,
    }
}

/// Worklist search of a callable's subtree.
///
/// Stops at the first `return` of a markup element or the first markup
/// element anywhere in the body. Bounded by the subtree size.
fn returns_markup(callable: Node<'_>) -> bool {
    let mut worklist = named_children(&callable);

    while let Some(node) = worklist.pop() {
        if is_markup(&node) {
            return true;
        }
        if SyntaxKind::of(&node) == SyntaxKind::ReturnStatement {
            let mut argument = named_children(&node).into_iter().next();
            while let Some(arg) = argument {
                if SyntaxKind::of(&arg) != SyntaxKind::ParenthesizedExpression {
                    break;
                }
                argument = named_children(&arg).into_iter().next();
            }
            if argument.is_some_and(|arg| is_markup(&arg)) {
                return true;
            }
        }
        worklist.extend(named_children(&node));
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> ParseResult {
        JsxParser::tsx()
            .parse(src, Path::new("Test.tsx"))
            .expect("valid source")
    }

    fn types(result: &ParseResult) -> Vec<&str> {
        result
            .elements
            .iter()
            .map(|e| e.element_type.as_str())
            .collect()
    }

    #[test]
    fn extracts_elements_in_document_order() {
        let result = parse(
            r#"const App = () => (
  <main>
    <h1>Title</h1>
    <img src="a.png" />
  </main>
);
"#,
        );
        assert_eq!(types(&result), vec!["main", "h1", "img"]);
        let lines: Vec<usize> = result.elements.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![2, 3, 4]);
        assert!(result.elements[0].has_children);
        assert!(result.elements[2].self_closing);
        assert!(!result.elements[2].has_children);
    }

    #[test]
    fn bare_attribute_is_true() {
        let result = parse("const x = <input disabled />;\n");
        assert_eq!(
            result.elements[0].attribute("disabled"),
            Some(&AttributeValue::Bool(true))
        );
    }

    #[test]
    fn resolves_literal_attribute_values() {
        let result = parse(
            r#"const x = <input type="text" aria-label={'Name'} tabIndex={0} hidden={false} onChange={handle} value={`v`} />;"#,
        );
        let input = &result.elements[0];
        assert_eq!(input.attribute("type"), Some(&AttributeValue::Str("text".into())));
        assert_eq!(input.attribute("aria-label"), Some(&AttributeValue::Str("Name".into())));
        assert_eq!(input.attribute("tabIndex"), Some(&AttributeValue::Number(0.0)));
        assert_eq!(input.attribute("hidden"), Some(&AttributeValue::Bool(false)));
        assert_eq!(input.attribute("onChange"), Some(&AttributeValue::Expression));
        assert_eq!(input.attribute("value"), Some(&AttributeValue::Expression));
    }

    #[test]
    fn spread_adds_only_its_key() {
        let result = parse("const x = <Button {...props} />;\n");
        let keys: Vec<&str> = result.elements[0]
            .attributes
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec![SPREAD_KEY]);
        assert_eq!(result.elements[0].element_type, "button");
    }

    #[test]
    fn member_names_keep_case() {
        let result = parse("const x = <Dialog.Content><a.b.c /></Dialog.Content>;\n");
        assert_eq!(types(&result), vec!["Dialog.Content", "unknown"]);
    }

    #[test]
    fn fragments_are_not_elements() {
        let result = parse("const x = <><span>a</span></>;\n");
        assert_eq!(types(&result), vec!["span"]);
    }

    #[test]
    fn whitespace_only_content_has_no_children() {
        let result = parse("const x = <button>\n</button>;\nconst y = <button>Save</button>;\n");
        assert!(!result.elements[0].has_children);
        assert!(result.elements[1].has_children);
    }

    #[test]
    fn indexes_headings_and_landmarks() {
        let result = parse(
            r"export function Page() {
  return (
    <div>
      <header><h1>Site</h1></header>
      <nav />
      <H2>Sub</H2>
    </div>
  );
}
",
        );
        let headings: Vec<&str> = result
            .headings
            .iter()
            .map(|h| h.element_type.as_str())
            .collect();
        assert_eq!(headings, vec!["h1", "h2"]);
        assert!(result.landmarks.contains("header"));
        assert!(result.landmarks.contains("nav"));
        assert_eq!(result.landmarks.len(), 2);
    }

    #[test]
    fn detects_components() {
        let result = parse(
            r"import React from 'react';

function Card() {
  return <div />;
}

const Badge = () => <span>new</span>;

const helper = () => 42;

export const List = function () {
  const items = [1, 2].map((i) => <li key={i}>{i}</li>);
  return items;
};

export default function () {
  return (<section />);
}

function Empty() {
  return <></>;
}
",
        );
        let found: Vec<(&str, ComponentKind, usize)> = result
            .components
            .iter()
            .map(|c| (c.name.as_str(), c.kind, c.line))
            .collect();
        assert_eq!(
            found,
            vec![
                ("Card", ComponentKind::Function, 3),
                ("Badge", ComponentKind::Arrow, 7),
                ("List", ComponentKind::Arrow, 11),
                ("Anonymous", ComponentKind::Function, 16),
            ]
        );
    }

    #[test]
    fn deeply_nested_markup_does_not_exhaust_the_stack() {
        const DEPTH: usize = 3000;
        let src = format!(
            "export const A = () => (\n{}{}\n);\n",
            "<div>".repeat(DEPTH),
            "</div>".repeat(DEPTH)
        );
        let result = parse(&src);
        assert_eq!(result.elements.len(), DEPTH);
        assert!(result.elements.iter().all(|e| e.element_type == "div"));
        assert_eq!(result.components.len(), 1);
        assert_eq!(result.components[0].name, "A");
    }

    #[test]
    fn typescript_syntax_is_accepted() {
        let result = parse(
            r"interface Props { label: string }

export const Field = ({ label }: Props): JSX.Element => (
  <label htmlFor={label as string}>{label}</label>
);
",
        );
        assert_eq!(types(&result), vec!["label"]);
        assert_eq!(result.components.len(), 1);
    }

    #[test]
    fn jsx_dialect_parses_plain_javascript() {
        let result = JsxParser::jsx()
            .parse("export const A = () => <a href=\"/\">x</a>;\n", Path::new("A.jsx"))
            .expect("valid source");
        assert_eq!(types(&result), vec!["a"]);
        assert!(JsxParser::jsx().handles(Path::new("A.jsx")));
        assert!(!JsxParser::jsx().handles(Path::new("A.tsx")));
    }

    #[test]
    fn malformed_source_is_a_parse_error() {
        let err = JsxParser::tsx()
            .parse("const x = <div>\n  <span>\n</div>;\n", Path::new("Broken.tsx"))
            .unwrap_err();
        assert_eq!(err.path, Path::new("Broken.tsx"));
        assert!(err.line >= 1);
        assert!(err.to_string().starts_with("Parse error in Broken.tsx:"));
    }
}
