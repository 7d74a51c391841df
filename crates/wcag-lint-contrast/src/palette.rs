//! Fixed utility-class color palette.
//!
//! Tokens are `white`, `black`, or `<family>-<shade>` for the families
//! gray, blue, red, green, yellow and slate with shades 50 through 950.
//! Anything outside the table resolves to `None`.

use serde::Serialize;

use crate::color::Rgb;

/// A resolved palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    /// Palette token, e.g. `gray-500`.
    pub token: &'static str,
    /// Color value.
    pub rgb: Rgb,
}

impl PaletteColor {
    /// Color family (`gray` for `gray-500`, `white` for `white`).
    #[must_use]
    pub fn family(&self) -> &'static str {
        self.token.split_once('-').map_or(self.token, |(f, _)| f)
    }

    /// Numeric shade, if the token has one.
    #[must_use]
    pub fn shade(&self) -> Option<u16> {
        self.token.split_once('-').and_then(|(_, s)| s.parse().ok())
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn hex(v: u32) -> Rgb {
    Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// The palette, in declaration order.
pub static PALETTE: &[(&str, Rgb)] = &[
    ("white", hex(0xffffff)),
    ("black", hex(0x000000)),
    ("gray-50", hex(0xf9fafb)),
    ("gray-100", hex(0xf3f4f6)),
    ("gray-200", hex(0xe5e7eb)),
    ("gray-300", hex(0xd1d5db)),
    ("gray-400", hex(0x9ca3af)),
    ("gray-500", hex(0x6b7280)),
    ("gray-600", hex(0x4b5563)),
    ("gray-700", hex(0x374151)),
    ("gray-800", hex(0x1f2937)),
    ("gray-900", hex(0x111827)),
    ("gray-950", hex(0x030712)),
    ("blue-50", hex(0xeff6ff)),
    ("blue-100", hex(0xdbeafe)),
    ("blue-200", hex(0xbfdbfe)),
    ("blue-300", hex(0x93c5fd)),
    ("blue-400", hex(0x60a5fa)),
    ("blue-500", hex(0x3b82f6)),
    ("blue-600", hex(0x2563eb)),
    ("blue-700", hex(0x1d4ed8)),
    ("blue-800", hex(0x1e40af)),
    ("blue-900", hex(0x1e3a8a)),
    ("blue-950", hex(0x172554)),
    ("red-50", hex(0xfef2f2)),
    ("red-100", hex(0xfee2e2)),
    ("red-200", hex(0xfecaca)),
    ("red-300", hex(0xfca5a5)),
    ("red-400", hex(0xf87171)),
    ("red-500", hex(0xef4444)),
    ("red-600", hex(0xdc2626)),
    ("red-700", hex(0xb91c1c)),
    ("red-800", hex(0x991b1b)),
    ("red-900", hex(0x7f1d1d)),
    ("red-950", hex(0x450a0a)),
    ("green-50", hex(0xf0fdf4)),
    ("green-100", hex(0xdcfce7)),
    ("green-200", hex(0xbbf7d0)),
    ("green-300", hex(0x86efac)),
    ("green-400", hex(0x4ade80)),
    ("green-500", hex(0x22c55e)),
    ("green-600", hex(0x16a34a)),
    ("green-700", hex(0x15803d)),
    ("green-800", hex(0x166534)),
    ("green-900", hex(0x14532d)),
    ("green-950", hex(0x052e16)),
    ("yellow-50", hex(0xfefce8)),
    ("yellow-100", hex(0xfef9c3)),
    ("yellow-200", hex(0xfef08a)),
    ("yellow-300", hex(0xfde047)),
    ("yellow-400", hex(0xfacc15)),
    ("yellow-500", hex(0xeab308)),
    ("yellow-600", hex(0xca8a04)),
    ("yellow-700", hex(0xa16207)),
    ("yellow-800", hex(0x854d0e)),
    ("yellow-900", hex(0x713f12)),
    ("yellow-950", hex(0x422006)),
    ("slate-50", hex(0xf8fafc)),
    ("slate-100", hex(0xf1f5f9)),
    ("slate-200", hex(0xe2e8f0)),
    ("slate-300", hex(0xcbd5e1)),
    ("slate-400", hex(0x94a3b8)),
    ("slate-500", hex(0x64748b)),
    ("slate-600", hex(0x475569)),
    ("slate-700", hex(0x334155)),
    ("slate-800", hex(0x1e293b)),
    ("slate-900", hex(0x0f172a)),
    ("slate-950", hex(0x020617)),
];

/// Looks up a bare token such as `gray-500`.
#[must_use]
pub fn lookup(token: &str) -> Option<PaletteColor> {
    PALETTE
        .iter()
        .find(|(name, _)| *name == token)
        .map(|&(token, rgb)| PaletteColor { token, rgb })
}

/// Resolves a utility class (`text-gray-500`, `bg-white`) or bare token.
#[must_use]
pub fn resolve_class(class: &str) -> Option<PaletteColor> {
    let token = class
        .strip_prefix("text-")
        .or_else(|| class.strip_prefix("bg-"))
        .unwrap_or(class);
    lookup(token)
}

/// Reverse lookup: the palette entry with exactly this color.
#[must_use]
pub fn name_for(color: Rgb) -> Option<PaletteColor> {
    PALETTE
        .iter()
        .find(|(_, rgb)| *rgb == color)
        .map(|&(token, rgb)| PaletteColor { token, rgb })
}

/// Foreground and background colors declared by a class list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassColors {
    /// Last `text-*` class that resolves in the palette.
    pub foreground: Option<PaletteColor>,
    /// Last `bg-*` class that resolves in the palette.
    pub background: Option<PaletteColor>,
}

/// Extracts text and background colors from a whitespace-separated class list.
///
/// Variant-prefixed classes (`hover:text-white`, `dark:bg-black`) do not
/// apply in the default state and are skipped.
#[must_use]
pub fn extract_colors(class_list: &str) -> ClassColors {
    let mut colors = ClassColors::default();
    for class in class_list.split_whitespace().filter(|c| !c.contains(':')) {
        if let Some(token) = class.strip_prefix("text-") {
            if let Some(color) = lookup(token) {
                colors.foreground = Some(color);
            }
        } else if let Some(token) = class.strip_prefix("bg-") {
            if let Some(color) = lookup(token) {
                colors.background = Some(color);
            }
        }
    }
    colors
}
