//! Brand color palette
//!
//! The palette is the single source of truth for every visual token. It is
//! extracted from the AstroMANIA logo set and never changes at runtime; both
//! theme variants and every style accessor read from [`PALETTE`].

use crate::error::{Result, ThemeError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// sRGB color with straight alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::rgb(r, g, b)
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// `#rrggbb`, ignoring alpha
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a <= 0.0 && self.r == 0 && self.g == 0 && self.b == 0 {
            f.write_str("transparent")
        } else if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(Color::TRANSPARENT);
        }
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ThemeError::InvalidColor(s.to_string()))?;
        let invalid = || ThemeError::InvalidColor(s.to_string());
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match digits.len() {
            3 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                // Expand #rgb to #rrggbb
                let r = ((value >> 8) & 0xF) as u8 * 0x11;
                let g = ((value >> 4) & 0xF) as u8 * 0x11;
                let b = (value & 0xF) as u8 * 0x11;
                Ok(Color::rgb(r, g, b))
            }
            6 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Color::from_hex(value))
            }
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Named brand colors
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    // Primary blues
    pub deep_blue: Color,
    pub navy_blue: Color,
    pub dark_navy: Color,

    // Accent blues
    pub accent_blue: Color,
    pub bright_blue: Color,
    pub steel_blue: Color,

    // Metallic tones
    pub platinum: Color,
    pub silver: Color,
    pub light_gray: Color,

    // Matte surfaces
    pub matte_white: Color,
    pub matte_gray: Color,

    // Dark surfaces
    pub charcoal: Color,
    pub graphite: Color,
    pub slate: Color,
    pub dark_gray: Color,

    // Contrast
    pub logo_black: Color,
    pub pure_white: Color,

    // Status
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

/// The brand palette, shared by reference everywhere
pub static PALETTE: Palette = Palette {
    deep_blue: Color::from_hex(0x1A237E),
    navy_blue: Color::from_hex(0x1E293B),
    dark_navy: Color::from_hex(0x0D1321),
    accent_blue: Color::from_hex(0x2563EB),
    bright_blue: Color::from_hex(0x3B82F6),
    steel_blue: Color::from_hex(0x1E40AF),
    platinum: Color::from_hex(0xF8FAFC),
    silver: Color::from_hex(0xE2E8F0),
    light_gray: Color::from_hex(0xF1F5F9),
    matte_white: Color::from_hex(0xFAFBFC),
    matte_gray: Color::from_hex(0xF8FAFC),
    charcoal: Color::from_hex(0x1E293B),
    graphite: Color::from_hex(0x334155),
    slate: Color::from_hex(0x475569),
    dark_gray: Color::from_hex(0x64748B),
    logo_black: Color::from_hex(0x1A1A1A),
    pure_white: Color::from_hex(0xFFFFFF),
    success: Color::from_hex(0x059669),
    warning: Color::from_hex(0xD97706),
    error: Color::from_hex(0xDC2626),
    info: Color::from_hex(0x0284C7),
};

impl Palette {
    /// The shared brand palette
    pub fn brand() -> &'static Palette {
        &PALETTE
    }

    /// All `(name, color)` pairs in declaration order
    pub fn entries(&self) -> [(&'static str, Color); 21] {
        [
            ("deepBlue", self.deep_blue),
            ("navyBlue", self.navy_blue),
            ("darkNavy", self.dark_navy),
            ("accentBlue", self.accent_blue),
            ("brightBlue", self.bright_blue),
            ("steelBlue", self.steel_blue),
            ("platinum", self.platinum),
            ("silver", self.silver),
            ("lightGray", self.light_gray),
            ("matteWhite", self.matte_white),
            ("matteGray", self.matte_gray),
            ("charcoal", self.charcoal),
            ("graphite", self.graphite),
            ("slate", self.slate),
            ("darkGray", self.dark_gray),
            ("logoBlack", self.logo_black),
            ("pureWhite", self.pure_white),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
            ("info", self.info),
        ]
    }

    /// Look up a color by its camelCase name
    pub fn get(&self, name: &str) -> Result<Color> {
        let entries = self.entries();
        entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, color)| *color)
            .ok_or_else(|| {
                let names: Vec<&str> = entries.iter().map(|(key, _)| *key).collect();
                ThemeError::unknown_variant("palette color", name, &names)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_opaque_as_hex() {
        assert_eq!(PALETTE.charcoal.to_string(), "#1e293b");
        assert_eq!(PALETTE.pure_white.to_string(), "#ffffff");
    }

    #[test]
    fn display_translucent_as_rgba() {
        let c = Color::rgb(30, 41, 59).with_alpha(0.04);
        assert_eq!(c.to_string(), "rgba(30, 41, 59, 0.04)");
        assert_eq!(Color::TRANSPARENT.to_string(), "transparent");
    }

    #[test]
    fn parse_short_and_long_hex() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#2563eb".parse::<Color>().unwrap(), PALETTE.accent_blue);
        assert!(matches!(
            "2563eb".parse::<Color>(),
            Err(ThemeError::InvalidColor(_))
        ));
        assert!("#12345".parse::<Color>().is_err());
        assert!(matches!(
            "#+ff".parse::<Color>(),
            Err(ThemeError::InvalidColor(_))
        ));
        assert!("#-12345".parse::<Color>().is_err());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(PALETTE.get("accentBlue").unwrap(), PALETTE.accent_blue);
        let err = PALETTE.get("hotPink").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownVariant { family: "palette color", .. }));
    }

    #[test]
    fn navy_and_charcoal_share_a_value() {
        assert_eq!(PALETTE.navy_blue, PALETTE.charcoal);
    }
}
