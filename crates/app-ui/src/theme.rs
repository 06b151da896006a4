//! Color palette for the Techfix app
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{colors, parse_hex_color};
//!
//! let (r, g, b) = parse_hex_color(colors::PRIMARY).unwrap();
//! assert_eq!((r, g, b), (0x25, 0x63, 0xEB));
//! ```

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Techfix brand and semantic colors
pub mod colors {
    /// Primary brand color (actions, active tabs, links)
    pub const PRIMARY: &str = "#2563EB";

    /// Warning tone (couriers in transit)
    pub const WARNING: &str = "#F59E0B";

    /// Success tone (received couriers)
    pub const SUCCESS: &str = "#10B981";

    /// Neutral gray (secondary text, unknown statuses)
    pub const GRAY: &str = "#6B7280";

    /// Light gray (borders, dividers, empty state icon)
    pub const LIGHT_GRAY: &str = "#E5E7EB";

    /// Screen background
    pub const LIGHT: &str = "#F3F4F6";

    /// Primary text
    pub const DARK: &str = "#111827";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";
}
