//! Resolution of catalog style tokens to terminal colors.
//!
//! Tokens are either `<family>-<shade>` names from the palette below or
//! `#rrggbb` hex literals.

use ratatui::style::Color;

/// Backdrop of the selector screen.
pub const SELECTOR_BACKGROUND: &str = "slate-900";
pub const SELECTOR_PANEL: &str = "slate-800";
pub const SELECTOR_TEXT: &str = "slate-100";
pub const SELECTOR_MUTED: &str = "slate-400";

const PALETTE: &[(&str, u32)] = &[
    ("white", 0xffffff),
    ("black", 0x000000),
    ("slate-100", 0xf1f5f9),
    ("slate-400", 0x94a3b8),
    ("slate-800", 0x1e293b),
    ("slate-900", 0x0f172a),
    ("gray-100", 0xf3f4f6),
    ("gray-300", 0xd1d5db),
    ("gray-600", 0x4b5563),
    ("gray-900", 0x111827),
    ("red-100", 0xfee2e2),
    ("red-300", 0xfca5a5),
    ("red-500", 0xef4444),
    ("red-900", 0x7f1d1d),
    ("orange-100", 0xffedd5),
    ("orange-300", 0xfdba74),
    ("orange-500", 0xf97316),
    ("orange-900", 0x7c2d12),
    ("amber-100", 0xfef3c7),
    ("amber-300", 0xfcd34d),
    ("amber-600", 0xd97706),
    ("amber-900", 0x78350f),
    ("green-100", 0xdcfce7),
    ("green-300", 0x86efac),
    ("green-500", 0x22c55e),
    ("green-900", 0x14532d),
    ("emerald-100", 0xd1fae5),
    ("emerald-300", 0x6ee7b7),
    ("emerald-500", 0x10b981),
    ("emerald-900", 0x064e3b),
    ("teal-100", 0xccfbf1),
    ("teal-300", 0x5eead4),
    ("teal-500", 0x14b8a6),
    ("teal-900", 0x134e4a),
    ("blue-100", 0xdbeafe),
    ("blue-300", 0x93c5fd),
    ("blue-500", 0x3b82f6),
    ("blue-900", 0x1e3a8a),
    ("indigo-100", 0xe0e7ff),
    ("indigo-300", 0xa5b4fc),
    ("indigo-500", 0x6366f1),
    ("indigo-900", 0x312e81),
    ("purple-100", 0xf3e8ff),
    ("purple-300", 0xd8b4fe),
    ("purple-500", 0xa855f7),
    ("purple-900", 0x581c87),
    ("pink-100", 0xfce7f3),
    ("pink-300", 0xf9a8d4),
    ("pink-500", 0xec4899),
    ("pink-900", 0x831843),
];

fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Resolve a token, or `None` if it is neither a palette name nor a hex color.
pub fn resolve(token: &str) -> Option<Color> {
    let token = token.trim();
    if let Some(hex) = token.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return u32::from_str_radix(hex, 16).ok().map(rgb);
    }
    PALETTE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|&(_, hex)| rgb(hex))
}

/// Resolve a token, falling back to the terminal default for unknown ones.
pub fn color(token: &str) -> Color {
    resolve(token).unwrap_or(Color::Reset)
}

/// Tokens in `tokens` that [`resolve`] does not understand.
pub fn unknown_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    tokens.into_iter().filter(|t| resolve(t).is_none()).collect()
}
