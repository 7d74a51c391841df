//! # wcag-lint-rules
//!
//! Built-in accessibility rules for wcag-lint.
//!
//! Rules come in two flavors. Structural rules inspect the element model
//! produced by a source parser; pattern rules scan raw lines with regular
//! expressions and work even where the model loses detail.
//!
//! ## Available Rules
//!
//! | Id | Kind | Severity | WCAG |
//! |----|------|----------|------|
//! | `interactive-role` | structural | high | 4.1.2 |
//! | `form-control-label` | structural | high | 3.3.2 |
//! | `image-alt` | structural | critical | 1.1.1 |
//! | `button-label` | structural | high | 4.1.2 |
//! | `heading-structure` | structural | high / medium | 1.3.1 |
//! | `landmark-regions` | structural | medium | 1.3.1 |
//! | `color-contrast` | structural | high | 1.4.3 |
//! | `semantic-html` | pattern | high | 4.1.2 |
//! | `aria-attributes` | pattern | medium | 4.1.2 |
//! | `keyboard-navigation` | pattern | high | 2.4.3, 2.1.1 |
//! | `form-labels` | pattern | high / medium | 3.3.2 |
//! | `alt-text` | pattern | critical / high / medium | 1.1.1, 4.1.2 |
//! | `heading-hierarchy` | pattern | low | 1.3.1 |
//!
//! ## Usage
//!
//! ```ignore
//! use wcag_lint_core::Analyzer;
//! use wcag_lint_jsx::JsxParser;
//!
//! let analyzer = Analyzer::builder()
//!     .root(".")
//!     .parser(JsxParser::tsx())
//!     .rules(wcag_lint_rules::all_rules()?)
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod patterns;

mod button_label;
mod color_contrast;
mod form_control_label;
mod heading_structure;
mod image_alt;
mod interactive_role;
mod landmark_regions;
mod registry;

pub use button_label::ButtonLabel;
pub use color_contrast::ColorContrast;
pub use form_control_label::FormControlLabel;
pub use heading_structure::HeadingStructure;
pub use image_alt::ImageAlt;
pub use interactive_role::InteractiveRole;
pub use landmark_regions::LandmarkRegions;
pub use patterns::{PatternError, PatternRule};
pub use registry::{all_rules, rule_ids, structural_rules};

/// Re-export core types for convenience.
pub use wcag_lint_core::{Rule, Severity, Violation};
