//! # wcag-lint-contrast
//!
//! WCAG color-contrast math for component styling.
//!
//! - [`color`]: hex / `rgb()` parsing, relative luminance, contrast ratio
//! - [`palette`]: the fixed utility-class palette and class-list extraction
//! - [`typography`]: size and weight utility classes for large-text checks
//! - [`contrast`]: threshold judgments and advisory suggestions
//!
//! ## Example
//!
//! ```
//! use wcag_lint_contrast::{check_text_contrast, extract_colors};
//!
//! let colors = extract_colors("text-gray-400 bg-white");
//! let check = check_text_contrast(
//!     colors.foreground.map(|c| c.rgb),
//!     colors.background.map(|c| c.rgb),
//!     "16px",
//!     "400",
//! );
//! assert_eq!(check.valid(), Some(false));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod contrast;
pub mod palette;
pub mod typography;

pub use color::{
    contrast_ratio, parse_color, parse_hex, parse_rgb, relative_luminance, to_hex, ColorError, Rgb,
};
pub use contrast::{
    check_contrast, check_text_contrast, is_large_text, meets_threshold, suggest_better_colors,
    suggest_tokens, threshold, ContrastCheck, ContrastResult, SizeClass, WcagLevel,
};
pub use palette::{extract_colors, lookup, resolve_class, ClassColors, PaletteColor};
pub use typography::{extract_typography, Typography};
