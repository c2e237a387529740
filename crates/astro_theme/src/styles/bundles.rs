//! Composite style bundles returned by the accessor

use crate::palette::Color;
use crate::theme::{Border, Interaction, Padding, Transition};
use crate::tokens::Shadow;
use serde::Serialize;

use super::ButtonVariant;

/// Card surface with its hover lift
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardStyle {
    pub background: Color,
    pub border: Border,
    pub radius: f32,
    pub shadow: Shadow,
    pub transition: Transition,
    pub hover: Interaction,
}

/// One button flavour
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ButtonStyle {
    pub background: Color,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    pub radius: f32,
    pub padding: Padding,
    pub font_weight: u16,
    pub font_size_rem: f32,
    pub font_family: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
    pub hover: Interaction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<Interaction>,
}

/// Primary, secondary and text buttons
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ButtonStyles {
    pub primary: ButtonStyle,
    pub secondary: ButtonStyle,
    pub text: ButtonStyle,
}

impl ButtonStyles {
    pub fn get(&self, variant: ButtonVariant) -> &ButtonStyle {
        match variant {
            ButtonVariant::Primary => &self.primary,
            ButtonVariant::Secondary => &self.secondary,
            ButtonVariant::Text => &self.text,
        }
    }
}

/// Tag / pill
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChipStyle {
    pub radius: f32,
    pub font_weight: u16,
    pub font_family: &'static str,
    pub font_size_rem: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    pub color: Color,
    pub hover: Interaction,
}

/// Translucent top navigation bar
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppBarStyle {
    pub background: Color,
    pub backdrop_filter: &'static str,
    pub border_bottom: Border,
    pub color: Color,
    pub shadow: Shadow,
}

/// Full-width page section
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SectionStyle {
    pub background: Color,
    pub padding: Padding,
    pub position: &'static str,
}

/// Color and face for a text role
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThemedText {
    pub color: Color,
    pub font_family: &'static str,
}

/// Primary, secondary and accent text
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextStyles {
    pub primary: ThemedText,
    pub secondary: ThemedText,
    pub accent: ThemedText,
}
