//! Font size and weight utility classes.
//!
//! Maps `text-*` size classes to pixels and `font-*` weight classes to
//! numeric weights so class lists can be classified as large text.

/// Pixel sizes of the `text-*` size scale.
const FONT_SIZES: &[(&str, f64)] = &[
    ("xs", 12.0),
    ("sm", 14.0),
    ("base", 16.0),
    ("lg", 18.0),
    ("xl", 20.0),
    ("2xl", 24.0),
    ("3xl", 30.0),
    ("4xl", 36.0),
    ("5xl", 48.0),
    ("6xl", 60.0),
    ("7xl", 72.0),
    ("8xl", 96.0),
    ("9xl", 128.0),
];

/// Numeric weights of the `font-*` weight scale.
const FONT_WEIGHTS: &[(&str, u16)] = &[
    ("thin", 100),
    ("extralight", 200),
    ("light", 300),
    ("normal", 400),
    ("medium", 500),
    ("semibold", 600),
    ("bold", 700),
    ("extrabold", 800),
    ("black", 900),
];

/// Size assumed when a class list declares none.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// Weight assumed when a class list declares none.
pub const DEFAULT_FONT_WEIGHT: u16 = 400;

/// Pixel size for a class like `text-2xl`.
#[must_use]
pub fn font_size_px(class: &str) -> Option<f64> {
    let key = class.strip_prefix("text-")?;
    FONT_SIZES.iter().find(|(k, _)| *k == key).map(|&(_, px)| px)
}

/// Numeric weight for a class like `font-bold`.
#[must_use]
pub fn font_weight(class: &str) -> Option<u16> {
    let key = class.strip_prefix("font-")?;
    FONT_WEIGHTS.iter().find(|(k, _)| *k == key).map(|&(_, w)| w)
}

/// Text size and weight declared by a class list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    /// Font size in pixels.
    pub size_px: f64,
    /// Numeric font weight.
    pub weight: u16,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            size_px: DEFAULT_FONT_SIZE_PX,
            weight: DEFAULT_FONT_WEIGHT,
        }
    }
}

impl Typography {
    /// CSS-style size string, e.g. `"24px"`.
    #[must_use]
    pub fn font_size(&self) -> String {
        format!("{}px", self.size_px)
    }

    /// CSS-style weight string, e.g. `"700"`.
    #[must_use]
    pub fn font_weight(&self) -> String {
        self.weight.to_string()
    }
}

/// Reads size and weight from a whitespace-separated class list.
///
/// The last matching class wins; variant-prefixed classes are skipped.
#[must_use]
pub fn extract_typography(class_list: &str) -> Typography {
    let mut typography = Typography::default();
    for class in class_list.split_whitespace().filter(|c| !c.contains(':')) {
        if let Some(px) = font_size_px(class) {
            typography.size_px = px;
        } else if let Some(weight) = font_weight(class) {
            typography.weight = weight;
        }
    }
    typography
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::is_large_text;

    #[test]
    fn size_and_weight_lookups() {
        assert_eq!(font_size_px("text-2xl"), Some(24.0));
        assert_eq!(font_size_px("text-gray-500"), None);
        assert_eq!(font_weight("font-bold"), Some(700));
        assert_eq!(font_weight("font-mono"), None);
    }

    #[test]
    fn defaults_when_undeclared() {
        let t = extract_typography("p-4 text-gray-500");
        assert_eq!(t, Typography::default());
        assert_eq!(t.font_size(), "16px");
        assert_eq!(t.font_weight(), "400");
    }

    #[test]
    fn class_list_feeds_large_text_check() {
        let heading = extract_typography("text-xl font-bold md:text-4xl");
        assert_eq!(heading.size_px, 20.0);
        assert!(is_large_text(&heading.font_size(), &heading.font_weight()));

        let body = extract_typography("text-lg font-bold");
        assert!(!is_large_text(&body.font_size(), &body.font_weight()));
    }
}
