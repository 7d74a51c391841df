//! Typed view over the tree-sitter node kinds the extractor cares about.
//!
//! The TSX and JavaScript grammars share their JSX node names, so one enum
//! covers both dialects. Kinds the extractor never inspects map to
//! [`SyntaxKind::Other`].

use tree_sitter::Node;

/// Node kinds used during element and component extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    /// `<div>...</div>` or a fragment `<>...</>`.
    JsxElement,
    /// `<img />`
    JsxSelfClosingElement,
    /// Opening tag of a [`SyntaxKind::JsxElement`].
    JsxOpeningElement,
    /// Closing tag of a [`SyntaxKind::JsxElement`].
    JsxClosingElement,
    /// `name="value"`, `name={value}` or bare `name`.
    JsxAttribute,
    /// `{...}` container, as attribute value, spread or child.
    JsxExpression,
    /// `xlink:href`
    JsxNamespaceName,
    /// Literal text between tags.
    JsxText,
    /// Plain identifier.
    Identifier,
    /// `a.b`
    MemberExpression,
    /// String literal, quotes included.
    String,
    /// `true`
    True,
    /// `false`
    False,
    /// Numeric literal.
    Number,
    /// `...props`
    SpreadElement,
    /// Line or block comment.
    Comment,
    /// `function Foo() {}`
    FunctionDeclaration,
    /// `const` / `let` declaration.
    LexicalDeclaration,
    /// `var` declaration.
    VariableDeclaration,
    /// `Foo = value` inside a declaration.
    VariableDeclarator,
    /// `() => {}`
    ArrowFunction,
    /// `function () {}` used as a value.
    FunctionExpression,
    /// `export ...`
    ExportStatement,
    /// `return ...`
    ReturnStatement,
    /// `( ... )`
    ParenthesizedExpression,
    /// Any other kind.
    Other,
}

impl SyntaxKind {
    /// Classifies a node.
    #[must_use]
    pub fn of(node: &Node<'_>) -> Self {
        Self::from_kind(node.kind())
    }

    /// Classifies a grammar kind name.
    #[must_use]
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "jsx_element" => Self::JsxElement,
            "jsx_self_closing_element" => Self::JsxSelfClosingElement,
            "jsx_opening_element" => Self::JsxOpeningElement,
            "jsx_closing_element" => Self::JsxClosingElement,
            "jsx_attribute" => Self::JsxAttribute,
            "jsx_expression" => Self::JsxExpression,
            "jsx_namespace_name" => Self::JsxNamespaceName,
            "jsx_text" => Self::JsxText,
            "identifier" | "property_identifier" => Self::Identifier,
            "member_expression" | "nested_identifier" => Self::MemberExpression,
            "string" => Self::String,
            "true" => Self::True,
            "false" => Self::False,
            "number" => Self::Number,
            "spread_element" => Self::SpreadElement,
            "comment" => Self::Comment,
            "function_declaration" | "generator_function_declaration" => {
                Self::FunctionDeclaration
            }
            "lexical_declaration" => Self::LexicalDeclaration,
            "variable_declaration" => Self::VariableDeclaration,
            "variable_declarator" => Self::VariableDeclarator,
            "arrow_function" => Self::ArrowFunction,
            "function_expression" | "function" => Self::FunctionExpression,
            "export_statement" => Self::ExportStatement,
            "return_statement" => Self::ReturnStatement,
            "parenthesized_expression" => Self::ParenthesizedExpression,
            _ => Self::Other,
        }
    }
}

/// Tag name of a markup element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementName<'a> {
    /// `<div>`, `<Button>`
    Identifier(&'a str),
    /// `<Dialog.Content>`
    Member {
        /// `Dialog`
        object: &'a str,
        /// `Content`
        property: &'a str,
    },
    /// Namespaced or deeper member names.
    Other,
}

impl<'a> ElementName<'a> {
    /// Reads the `name` field of an opening or self-closing tag.
    ///
    /// A tag without a name (a fragment) yields `None`.
    #[must_use]
    pub fn of_tag(tag: &Node<'_>, src: &'a [u8]) -> Option<Self> {
        let name = tag.child_by_field_name("name")?;
        Some(match SyntaxKind::of(&name) {
            SyntaxKind::Identifier => Self::Identifier(text(&name, src)),
            SyntaxKind::MemberExpression => {
                let mut cursor = name.walk();
                let parts: Vec<Node<'_>> = name.named_children(&mut cursor).collect();
                match parts.as_slice() {
                    [object, property]
                        if SyntaxKind::of(object) == SyntaxKind::Identifier
                            && SyntaxKind::of(property) == SyntaxKind::Identifier =>
                    {
                        Self::Member {
                            object: text(object, src),
                            property: text(property, src),
                        }
                    }
                    _ => Self::Other,
                }
            }
            _ => Self::Other,
        })
    }

    /// Element type as stored in the model.
    ///
    /// Simple identifiers are lowercased; member references keep their case.
    #[must_use]
    pub fn element_type(&self) -> String {
        match self {
            Self::Identifier(name) => name.to_ascii_lowercase(),
            Self::Member { object, property } => format!("{object}.{property}"),
            Self::Other => "unknown".to_string(),
        }
    }
}

/// Source text of a node, or `""` if it is not valid UTF-8.
#[must_use]
pub fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kinds_are_other() {
        assert_eq!(SyntaxKind::from_kind("jsx_element"), SyntaxKind::JsxElement);
        assert_eq!(SyntaxKind::from_kind("template_string"), SyntaxKind::Other);
    }

    #[test]
    fn element_type_normalization() {
        assert_eq!(ElementName::Identifier("DIV").element_type(), "div");
        assert_eq!(
            ElementName::Member {
                object: "Dialog",
                property: "Content"
            }
            .element_type(),
            "Dialog.Content"
        );
        assert_eq!(ElementName::Other.element_type(), "unknown");
    }
}
