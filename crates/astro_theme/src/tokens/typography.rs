//! Typography tokens

use crate::error::{Result, ThemeError};
use crate::palette::Color;
use serde::Serialize;
use std::str::FromStr;

/// Display face for headings
pub const HEADING_FAMILY: &str = "\"Open Sauce One\", sans-serif";
/// Text face for body copy, buttons and captions
pub const BODY_FAMILY: &str = "\"Open Sauce Sans\", sans-serif";
/// Full fallback stack
pub const SYSTEM_FAMILY: &str = "\"Open Sauce One\", \"Open Sauce Sans\", \"Inter\", \"system-ui\", \"-apple-system\", \"BlinkMacSystemFont\", \"Segoe UI\", \"Roboto\", sans-serif";

/// Font family stacks
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FontFamilies {
    pub heading: &'static str,
    pub body: &'static str,
    pub system: &'static str,
}

impl Default for FontFamilies {
    fn default() -> Self {
        Self {
            heading: HEADING_FAMILY,
            body: BODY_FAMILY,
            system: SYSTEM_FAMILY,
        }
    }
}

/// Named font weights
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    pub const ALL: [FontWeight; 9] = [
        FontWeight::Thin,
        FontWeight::ExtraLight,
        FontWeight::Light,
        FontWeight::Regular,
        FontWeight::Medium,
        FontWeight::SemiBold,
        FontWeight::Bold,
        FontWeight::ExtraBold,
        FontWeight::Black,
    ];

    /// Numeric CSS weight
    pub fn value(self) -> u16 {
        match self {
            Self::Thin => 100,
            Self::ExtraLight => 200,
            Self::Light => 300,
            Self::Regular => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
            Self::ExtraBold => 800,
            Self::Black => 900,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::ExtraLight => "extraLight",
            Self::Light => "light",
            Self::Regular => "regular",
            Self::Medium => "medium",
            Self::SemiBold => "semiBold",
            Self::Bold => "bold",
            Self::ExtraBold => "extraBold",
            Self::Black => "black",
        }
    }
}

impl FromStr for FontWeight {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|w| w.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|w| w.name()).collect();
                ThemeError::unknown_variant("font weight", s, &names)
            })
    }
}

/// A single typographic style
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    pub font_family: &'static str,
    pub font_size_rem: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    pub letter_spacing_em: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl TextStyle {
    const fn heading(size: f32, weight: u16, line_height: f32, tracking: f32, color: Color) -> Self {
        Self {
            font_family: HEADING_FAMILY,
            font_size_rem: size,
            font_weight: Some(weight),
            line_height: Some(line_height),
            letter_spacing_em: tracking,
            color: Some(color),
        }
    }

    const fn body(size: f32, line_height: f32, tracking: f32, color: Color) -> Self {
        Self {
            font_family: BODY_FAMILY,
            font_size_rem: size,
            font_weight: None,
            line_height: Some(line_height),
            letter_spacing_em: tracking,
            color: Some(color),
        }
    }

    /// `font-size` as a CSS length
    pub fn font_size(&self) -> String {
        format!("{}rem", self.font_size_rem)
    }

    /// `letter-spacing` as a CSS length
    pub fn letter_spacing(&self) -> String {
        format!("{}em", self.letter_spacing_em)
    }
}

/// Typography for one theme variant
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypographyTokens {
    pub families: FontFamilies,
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub h5: TextStyle,
    pub h6: TextStyle,
    pub body1: TextStyle,
    pub body2: TextStyle,
    pub button: TextStyle,
    pub caption: TextStyle,
}

impl TypographyTokens {
    /// Build the type scale with the given heading, body and muted text colors
    pub fn new(heading: Color, body: Color, muted: Color) -> Self {
        Self {
            families: FontFamilies::default(),
            h1: TextStyle::heading(3.5, 700, 1.1, -0.02, heading),
            h2: TextStyle::heading(2.75, 700, 1.2, -0.01, heading),
            h3: TextStyle::heading(2.25, 600, 1.3, -0.01, heading),
            h4: TextStyle::heading(1.875, 600, 1.4, 0.0, heading),
            h5: TextStyle::heading(1.5, 600, 1.5, 0.0, heading),
            h6: TextStyle::heading(1.25, 600, 1.6, 0.0, heading),
            body1: TextStyle::body(1.0, 1.7, 0.0, body),
            body2: TextStyle::body(0.875, 1.6, 0.0, muted),
            button: TextStyle {
                font_family: BODY_FAMILY,
                font_size_rem: 0.875,
                font_weight: Some(600),
                line_height: None,
                letter_spacing_em: 0.02,
                color: None,
            },
            caption: TextStyle::body(0.75, 1.5, 0.03, muted),
        }
    }

    /// Heading style for levels 1..=6; `None` outside that range
    pub fn heading(&self, level: u8) -> Option<&TextStyle> {
        match level {
            1 => Some(&self.h1),
            2 => Some(&self.h2),
            3 => Some(&self.h3),
            4 => Some(&self.h4),
            5 => Some(&self.h5),
            6 => Some(&self.h6),
            _ => None,
        }
    }
}
