//! # wcag-lint-jsx
//!
//! Tree-sitter based element extraction for JSX-family component sources.
//!
//! This crate plugs into `wcag-lint-core` through the
//! [`SourceParser`](wcag_lint_core::SourceParser) trait and provides:
//!
//! - [`JsxParser`] for `.tsx` (TypeScript grammar) and `.jsx` (JavaScript grammar)
//! - [`SyntaxKind`] / [`ElementName`], the typed view over grammar nodes

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod parser;
pub mod syntax;

pub use parser::JsxParser;
pub use syntax::{ElementName, SyntaxKind};
