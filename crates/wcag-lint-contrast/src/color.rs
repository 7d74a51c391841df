//! Color parsing and WCAG luminance math.
//!
//! Relative luminance follows WCAG 2.x: each sRGB channel is normalized to
//! `[0, 1]`, linearized with the piecewise gamma curve, and weighted
//! `0.2126 R + 0.7152 G + 0.0722 B`. Contrast ratio is
//! `(L_lighter + 0.05) / (L_darker + 0.05)`, in `[1, 21]`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::palette;

static RGB_FUNCTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"rgb\((\d+),\s*(\d+),\s*(\d+)\)").ok());

/// Error parsing a color literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Not a 3- or 6-digit hex color.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in `[0, 1]`.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let [r, g, b] = [self.r, self.g, self.b].map(linearize);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Parses `#rgb` or `#rrggbb` (the `#` is optional).
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] for any other shape.
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return Err(ColorError::InvalidHex(hex.to_string())),
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Lowercase `#rrggbb` form of a color.
#[must_use]
pub fn to_hex(color: Rgb) -> String {
    color.to_hex()
}

/// Parses an `rgb(r, g, b)` functional color. Out-of-range channels yield `None`.
#[must_use]
pub fn parse_rgb(value: &str) -> Option<Rgb> {
    let caps = RGB_FUNCTION.as_ref()?.captures(value)?;
    Some(Rgb::new(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    ))
}

/// Parses any supported color spelling: hex, `rgb()`, a palette token
/// (`gray-500`) or a utility class (`text-gray-500`, `bg-white`).
#[must_use]
pub fn parse_color(value: &str) -> Option<Rgb> {
    let value = value.trim();
    if value.starts_with('#') {
        parse_hex(value).ok()
    } else if value.starts_with("rgb(") {
        parse_rgb(value)
    } else {
        palette::resolve_class(value).map(|c| c.rgb)
    }
}

/// WCAG relative luminance of a color.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    color.relative_luminance()
}

/// Contrast ratio between two colors, independent of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
