//! Theme configuration: every styling knob the composer consumes.
//!
//! Brand colors, fonts, margins, the bullet glyph, and the header toggle all
//! live here so that a new brand is a new `Theme` value, not a diverging copy
//! of the composer.

use serde::{Deserialize, Serialize};

/// Styling configuration for one document brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    /// Hex color for the candidate name and section headings.
    pub heading_hex: String,
    /// Hex color for rules, the header bar, and accent text (degree lines).
    pub accent_hex: String,
    pub heading_font: String,
    pub body_font: String,
    /// Base body size in points.
    pub body_size_pt: u8,
    /// Page margin in inches, applied to all four sides.
    pub margin_in: f32,
    /// Glyph prefixed to every bullet and list item.
    pub bullet_glyph: String,
    /// Draw a horizontal rule under each section heading.
    pub section_rules: bool,
    /// Render the header block (logo + brand bar) when logo bytes are present.
    pub header_logo: bool,
    /// Logo width in inches when the header is rendered.
    pub logo_width_in: f32,
}

/// Resolves a built-in theme by name. Returns `None` for unknown names so the
/// caller can report the configured value.
pub fn theme_by_name(name: &str) -> Option<Theme> {
    match name {
        "classic" => Some(classic()),
        "slate" => Some(slate()),
        _ => None,
    }
}

/// The default brand: navy headings, teal accents, logo header.
pub fn classic() -> Theme {
    Theme {
        name: "classic".to_string(),
        heading_hex: "1F3864".to_string(),
        accent_hex: "178076".to_string(),
        heading_font: "Calibri".to_string(),
        body_font: "Calibri".to_string(),
        body_size_pt: 11,
        margin_in: 1.0,
        bullet_glyph: "•".to_string(),
        section_rules: true,
        header_logo: true,
        logo_width_in: 1.0,
    }
}

/// Muted variant: tighter margins, dash bullets, no header block.
pub fn slate() -> Theme {
    Theme {
        name: "slate".to_string(),
        heading_hex: "334155".to_string(),
        accent_hex: "64748B".to_string(),
        heading_font: "Cambria".to_string(),
        body_font: "Calibri".to_string(),
        body_size_pt: 11,
        margin_in: 0.8,
        bullet_glyph: "–".to_string(),
        section_rules: true,
        header_logo: false,
        logo_width_in: 1.0,
    }
}

/// Normalizes a hex color to the 6-digit uppercase form the document format
/// expects. Accepts an optional leading `#`. Returns `None` for anything that
/// is not exactly 6 hex digits.
pub fn normalize_hex(hex: &str) -> Option<String> {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(hex.to_ascii_uppercase())
    } else {
        None
    }
}
