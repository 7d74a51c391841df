//! # wcag-lint-core
//!
//! Core framework for accessibility linting of component markup.
//!
//! This crate provides the foundational traits and types for building
//! accessibility scanners. It includes:
//!
//! - the element model ([`Element`], [`ParseResult`]) and the
//!   [`SourceParser`] seam parsers plug into
//! - structural [`query`] predicates and [`structure`] analyzers
//! - the [`Rule`] trait every check implements
//! - [`Analyzer`] for orchestrating a scan into a [`ScanReport`]
//!
//! ## Example
//!
//! ```ignore
//! use wcag_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root(".")
//!     .parser(TsxParser::new())
//!     .rule(MyRule::new())
//!     .build();
//!
//! let report = analyzer.scan_files(&files);
//! print!("{}", report.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod model;
mod rule;
mod types;

pub mod query;
pub mod structure;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, FailLevel, PACKAGE_JSON_KEY};
pub use context::FileContext;
pub use model::{
    AttributeValue, ComponentDecl, ComponentKind, Element, ParseError, ParseResult, ParserBox,
    SourceParser, EXPRESSION_TOKEN, LANDMARK_TYPES, SPREAD_KEY,
};
pub use rule::{Rule, RuleBox};
pub use types::{Label, Location, ScanReport, Severity, Suggestion, Violation};
