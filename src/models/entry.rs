use serde::Serialize;
use swatch_core::Color;
use utoipa::ToSchema;

/// Brightness above which text drawn on a color should be dark.
pub const DARK_TEXT_THRESHOLD: f64 = 0.5;

/// Text color that stays readable on top of a color swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Dark,
    Light,
}

impl TextColor {
    pub fn for_background(color: Color) -> Self {
        if color.brightness() > DARK_TEXT_THRESHOLD {
            TextColor::Dark
        } else {
            TextColor::Light
        }
    }
}

/// Display data for one library color
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ColorEntry {
    /// Hex string as stored in the library
    pub hex: String,
    /// Display name, the hex string when the color has no name
    pub name: String,
    /// 8-bit RGB channels
    pub rgb: [u8; 3],
    /// Readable text color on this swatch
    pub text_color: TextColor,
    /// Whether the caller marked this entry as selected
    pub selected: bool,
}

impl ColorEntry {
    /// Build an entry for a parsed color.
    pub fn new(hex: &str, name: Option<&str>, color: Color, selected: bool) -> Self {
        let name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => hex.to_string(),
        };
        Self {
            hex: hex.to_string(),
            name,
            rgb: color.to_bytes(),
            text_color: TextColor::for_background(color),
            selected,
        }
    }
}
