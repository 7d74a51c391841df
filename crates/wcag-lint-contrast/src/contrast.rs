//! WCAG contrast judgments for text.
//!
//! - AA: 4.5:1 for normal text, 3:1 for large text
//! - AAA: 7:1 for normal text, 4.5:1 for large text
//!
//! Large text is at least 24px, or at least 18.66px at weight 700 or above.

use serde::Serialize;

use crate::color::{contrast_ratio, parse_color, Rgb};
use crate::palette::{self, PaletteColor};

/// WCAG conformance level.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum WcagLevel {
    /// Level AA (default).
    #[default]
    AA,
    /// Level AAA.
    AAA,
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AA => write!(f, "AA"),
            Self::AAA => write!(f, "AAA"),
        }
    }
}

impl std::str::FromStr for WcagLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AA" => Ok(Self::AA),
            "AAA" => Ok(Self::AAA),
            other => Err(format!("unknown WCAG level: {other}")),
        }
    }
}

/// Text size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    /// Body-size text.
    Normal,
    /// Large text, held to a lower minimum.
    Large,
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Large => write!(f, "large"),
        }
    }
}

/// Minimum ratio for a level and size class.
#[must_use]
pub fn threshold(level: WcagLevel, size: SizeClass) -> f64 {
    match (level, size) {
        (WcagLevel::AAA, SizeClass::Normal) => 7.0,
        (WcagLevel::AAA, SizeClass::Large) | (WcagLevel::AA, SizeClass::Normal) => 4.5,
        (WcagLevel::AA, SizeClass::Large) => 3.0,
    }
}

/// Whether `ratio` meets the minimum for `level` and `size`.
#[must_use]
pub fn meets_threshold(ratio: f64, level: WcagLevel, size: SizeClass) -> bool {
    ratio >= threshold(level, size)
}

/// Classifies CSS-style size and weight strings (`"18.66px"`, `"700"`).
///
/// The size is read from its leading number; an unreadable size is never
/// large. An unreadable weight counts as 400, `bold` as 700.
#[must_use]
pub fn is_large_text(font_size: &str, font_weight: &str) -> bool {
    let Some(size) = leading_number(font_size) else {
        return false;
    };
    let weight = parse_weight(font_weight);
    size >= 24.0 || (size >= 18.66 && weight >= 700)
}

/// Size class for CSS-style size and weight strings.
#[must_use]
pub fn size_class(font_size: &str, font_weight: &str) -> SizeClass {
    if is_large_text(font_size, font_weight) {
        SizeClass::Large
    } else {
        SizeClass::Normal
    }
}

fn parse_weight(weight: &str) -> u32 {
    let weight = weight.trim();
    if weight.eq_ignore_ascii_case("bold") {
        return 700;
    }
    let digits: String = weight.chars().take_while(char::is_ascii_digit).collect();
    match digits.parse::<u32>() {
        Ok(w) if w > 0 => w,
        _ => 400,
    }
}

fn leading_number(value: &str) -> Option<f64> {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse().ok()
}

/// A measured contrast judgment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastResult {
    /// Contrast ratio, unrounded.
    pub ratio: f64,
    /// Whether the ratio meets the threshold.
    pub valid: bool,
    /// Threshold that applied.
    pub threshold: f64,
    /// Level judged against.
    pub level: WcagLevel,
    /// Size class of the text.
    pub size_class: SizeClass,
    /// `Passes WCAG AA (4.83:1)` or `Fails WCAG AA (2.85:1, needs 4.5:1)`.
    pub message: String,
}

/// Outcome of a contrast check.
///
/// Missing colors are a distinct outcome, never a failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ContrastCheck {
    /// Foreground or background could not be determined.
    Insufficient,
    /// Both colors were known.
    Measured(ContrastResult),
}

impl ContrastCheck {
    /// `Some(pass)` for measured checks, `None` when colors were unknown.
    #[must_use]
    pub fn valid(&self) -> Option<bool> {
        match self {
            Self::Insufficient => None,
            Self::Measured(r) => Some(r.valid),
        }
    }

    /// Ratio for measured checks.
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Self::Insufficient => None,
            Self::Measured(r) => Some(r.ratio),
        }
    }

    /// Human-readable outcome.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Insufficient => "Unable to determine colors",
            Self::Measured(r) => &r.message,
        }
    }
}

/// Judges text contrast at the given level.
#[must_use]
pub fn check_contrast(
    foreground: Option<Rgb>,
    background: Option<Rgb>,
    font_size: &str,
    font_weight: &str,
    level: WcagLevel,
) -> ContrastCheck {
    let (Some(fg), Some(bg)) = (foreground, background) else {
        return ContrastCheck::Insufficient;
    };

    let ratio = contrast_ratio(fg, bg);
    let size = size_class(font_size, font_weight);
    let needed = threshold(level, size);
    let valid = ratio >= needed;
    let message = if valid {
        format!("Passes WCAG {level} ({ratio:.2}:1)")
    } else {
        format!("Fails WCAG {level} ({ratio:.2}:1, needs {needed}:1)")
    };

    ContrastCheck::Measured(ContrastResult {
        ratio,
        valid,
        threshold: needed,
        level,
        size_class: size,
        message,
    })
}

/// Judges text contrast at level AA.
#[must_use]
pub fn check_text_contrast(
    foreground: Option<Rgb>,
    background: Option<Rgb>,
    font_size: &str,
    font_weight: &str,
) -> ContrastCheck {
    check_contrast(foreground, background, font_size, font_weight, WcagLevel::AA)
}

/// Families whose shades are suggested as replacements.
const GRAYSCALE_FAMILIES: &[&str] = &["gray", "slate"];

/// Advisory replacements for a low-contrast pair of palette colors.
///
/// A grayscale foreground lighter than shade 600 gets a darker suggestion;
/// a grayscale background darker than shade 400 gets a lighter one.
#[must_use]
pub fn suggest_tokens(
    foreground: Option<&PaletteColor>,
    background: Option<&PaletteColor>,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if let Some((family, shade)) = foreground.and_then(grayscale_shade) {
        if shade < 600 {
            suggestions.push(format!(
                "Try text-{family}-700 or text-{family}-800 for better contrast"
            ));
        }
    }

    if let Some((family, shade)) = background.and_then(grayscale_shade) {
        if shade > 400 {
            suggestions.push(format!(
                "Try bg-{family}-100 or bg-white for better contrast"
            ));
        }
    }

    suggestions
}

/// Advisory replacements for free-form color spellings.
///
/// Hex and `rgb()` values are mapped back to a palette token when they
/// match one exactly.
#[must_use]
pub fn suggest_better_colors(foreground: &str, background: &str) -> Vec<String> {
    let to_palette = |value: &str| {
        palette::resolve_class(value).or_else(|| parse_color(value).and_then(palette::name_for))
    };
    suggest_tokens(
        to_palette(foreground).as_ref(),
        to_palette(background).as_ref(),
    )
}

fn grayscale_shade(color: &PaletteColor) -> Option<(&'static str, u16)> {
    let family = color.family();
    if !GRAYSCALE_FAMILIES.contains(&family) {
        return None;
    }
    color.shade().map(|shade| (family, shade))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::lookup;

    fn rgb(token: &str) -> Option<Rgb> {
        lookup(token).map(|c| c.rgb)
    }

    #[test]
    fn aa_normal_threshold_edges() {
        assert!(meets_threshold(4.5, WcagLevel::AA, SizeClass::Normal));
        assert!(!meets_threshold(4.49, WcagLevel::AA, SizeClass::Normal));
        assert!(meets_threshold(3.0, WcagLevel::AA, SizeClass::Large));
        assert!(!meets_threshold(6.99, WcagLevel::AAA, SizeClass::Normal));
        assert!(meets_threshold(4.5, WcagLevel::AAA, SizeClass::Large));
    }

    #[test]
    fn large_text_classification() {
        assert!(is_large_text("24px", "400"));
        assert!(!is_large_text("16px", "700"));
        assert!(is_large_text("18.66px", "700"));
        assert!(!is_large_text("18.66px", "400"));
        assert!(is_large_text("20px", "bold"));
        assert!(!is_large_text("20px", "normal"));
        assert!(!is_large_text("large", "700"));
        assert!(is_large_text("30", ""));
    }

    #[test]
    fn insufficient_is_not_failure() {
        let check = check_text_contrast(rgb("gray-500"), None, "16px", "400");
        assert_eq!(check, ContrastCheck::Insufficient);
        assert_eq!(check.valid(), None);
        assert_eq!(check.ratio(), None);
    }

    #[test]
    fn passing_message_carries_ratio() {
        let check = check_text_contrast(rgb("black"), rgb("white"), "16px", "400");
        assert_eq!(check.valid(), Some(true));
        assert_eq!(check.message(), "Passes WCAG AA (21.00:1)");
    }

    #[test]
    fn failing_message_names_threshold() {
        let check = check_text_contrast(rgb("gray-400"), rgb("white"), "16px", "400");
        assert_eq!(check.valid(), Some(false));
        let ContrastCheck::Measured(result) = &check else {
            panic!("colors are known");
        };
        assert_eq!(result.threshold, 4.5);
        assert_eq!(result.size_class, SizeClass::Normal);
        assert!(result.message.starts_with("Fails WCAG AA ("));
        assert!(result.message.ends_with(":1, needs 4.5:1)"));
    }

    #[test]
    fn large_text_uses_lower_threshold() {
        let check = check_text_contrast(rgb("gray-400"), rgb("white"), "24px", "400");
        let ContrastCheck::Measured(result) = check else {
            panic!("colors are known");
        };
        assert_eq!(result.threshold, 3.0);
        assert_eq!(result.size_class, SizeClass::Large);
    }

    #[test]
    fn aaa_is_stricter() {
        // gray-500 on white is about 4.83:1.
        let aa = check_contrast(rgb("gray-500"), rgb("white"), "16px", "400", WcagLevel::AA);
        let aaa = check_contrast(rgb("gray-500"), rgb("white"), "16px", "400", WcagLevel::AAA);
        assert_eq!(aa.valid(), Some(true));
        assert_eq!(aaa.valid(), Some(false));
        assert!(aaa.message().contains("needs 7:1"));
    }

    #[test]
    fn suggests_darker_text_and_lighter_background() {
        let fg = lookup("gray-400");
        let bg = lookup("slate-700");
        assert_eq!(
            suggest_tokens(fg.as_ref(), bg.as_ref()),
            vec![
                "Try text-gray-700 or text-gray-800 for better contrast",
                "Try bg-slate-100 or bg-white for better contrast",
            ]
        );
    }

    #[test]
    fn no_suggestions_outside_grayscale() {
        let fg = lookup("blue-300");
        let bg = lookup("white");
        assert!(suggest_tokens(fg.as_ref(), bg.as_ref()).is_empty());
        let dark = lookup("gray-700");
        assert!(suggest_tokens(dark.as_ref(), None).is_empty());
    }

    #[test]
    fn suggestions_accept_hex_and_classes() {
        assert_eq!(
            suggest_better_colors("#9ca3af", "bg-white"),
            vec!["Try text-gray-700 or text-gray-800 for better contrast"]
        );
        assert!(suggest_better_colors("#123456", "#654321").is_empty());
    }
}
