//! Theme descriptors
//!
//! A [`Theme`] is an immutable description of one variant: palette roles,
//! typography, shape, spacing, the elevation scale and per-component style
//! overrides. Exactly two are built, light and dark, and they live in a
//! [`ThemeBundle`]. The dark theme starts from the light one and replaces only
//! what differs, so anything it does not mention is inherited.

use crate::error::{Result, ThemeError};
use crate::palette::{Color, PALETTE};
use crate::tokens::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Light or dark display mode
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 2] = [ColorScheme::Light, ColorScheme::Dark];

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn from_dark_mode(is_dark_mode: bool) -> Self {
        if is_dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::unknown_variant(
                "color scheme",
                other,
                &["light", "dark"],
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Palette roles
// ─────────────────────────────────────────────────────────────────────────────

/// A brand role with its tonal neighbours
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColorRole {
    pub main: Color,
    pub light: Color,
    pub dark: Color,
    pub contrast_text: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BackgroundRole {
    pub default: Color,
    pub paper: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextRole {
    pub primary: Color,
    pub secondary: Color,
}

/// Semantic palette assignment for one variant
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaletteRoles {
    pub mode: ColorScheme,
    pub primary: ColorRole,
    pub secondary: ColorRole,
    pub background: BackgroundRole,
    pub text: TextRole,
    pub divider: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
    pub success: Color,
}

// ─────────────────────────────────────────────────────────────────────────────
// Component style building blocks
// ─────────────────────────────────────────────────────────────────────────────

/// Standard easing for interactive transitions
pub const STANDARD_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// A CSS transition on all properties
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: &'static str,
}

impl Transition {
    pub const fn standard(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            easing: STANDARD_EASING,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "all {}s {}",
            self.duration_ms as f32 / 1000.0,
            self.easing
        )
    }
}

impl Serialize for Transition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Solid border
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    pub const fn solid(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px solid {}", self.width, self.color)
    }
}

impl Serialize for Border {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Vertical / horizontal padding in px
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    pub vertical: f32,
    pub horizontal: f32,
}

impl Padding {
    pub const fn new(vertical: f32, horizontal: f32) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", px(self.vertical), px(self.horizontal))
    }
}

impl Serialize for Padding {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Style deltas applied on an interaction state (hover, active, focus)
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Interaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Vertical translation in px (`translateY`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

impl Interaction {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Component overrides
// ─────────────────────────────────────────────────────────────────────────────

/// Document-level baseline (body and scrollbars)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BaselineOverrides {
    pub body_background: Color,
    pub body_color: Color,
    pub font_family: &'static str,
    pub scrollbar_width: f32,
    pub scrollbar_thumb: Color,
    pub scrollbar_thumb_hover: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ButtonVariantOverrides {
    pub background: Color,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    pub hover: Interaction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<Interaction>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ButtonOverrides {
    pub radius: f32,
    pub padding: Padding,
    pub font_size_rem: f32,
    pub font_weight: u16,
    pub transition: Transition,
    pub hover: Interaction,
    pub active: Interaction,
    pub contained: ButtonVariantOverrides,
    pub outlined: ButtonVariantOverrides,
    pub text: ButtonVariantOverrides,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardOverrides {
    pub radius: f32,
    pub border: Border,
    pub background: Color,
    pub shadow: Shadow,
    pub transition: Transition,
    pub hover: Interaction,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppBarOverrides {
    pub background: Color,
    pub backdrop_filter: &'static str,
    pub border_bottom: Border,
    pub color: Color,
    pub shadow: Shadow,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChipVariantOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    pub color: Color,
    pub hover: Interaction,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChipOverrides {
    pub radius: f32,
    pub font_weight: u16,
    pub font_family: &'static str,
    pub font_size_rem: f32,
    pub filled: ChipVariantOverrides,
    pub outlined: ChipVariantOverrides,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaperOverrides {
    pub background: Color,
    pub radius: f32,
    /// Shadows for elevation 1, 2 and 3
    pub elevation: [Shadow; 3],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextFieldOverrides {
    pub radius: f32,
    pub background: Color,
    pub border: Border,
    pub hover_border_color: Color,
    pub focus_border: Border,
    pub label_color: Color,
    pub label_focus_color: Color,
    pub label_font_family: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IconButtonOverrides {
    pub radius: f32,
    pub transition: Transition,
    pub hover: Interaction,
}

/// Per-component style overrides
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComponentOverrides {
    pub baseline: BaselineOverrides,
    pub button: ButtonOverrides,
    pub card: CardOverrides,
    pub app_bar: AppBarOverrides,
    pub chip: ChipOverrides,
    pub paper: PaperOverrides,
    pub text_field: TextFieldOverrides,
    pub icon_button: IconButtonOverrides,
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Complete, immutable description of one theme variant
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub scheme: ColorScheme,
    pub palette: PaletteRoles,
    pub typography: TypographyTokens,
    /// Base corner radius in px
    pub shape_radius: f32,
    pub spacing: SpacingTokens,
    pub radii: RadiusTokens,
    pub shadows: ShadowScale,
    pub components: ComponentOverrides,
}

const THEME_NAME: &str = "AstroMANIA";

impl Theme {
    /// The light variant
    pub fn light() -> Self {
        let c = &PALETTE;
        let tint = LIGHT_SHADOW_TINT;

        let palette = PaletteRoles {
            mode: ColorScheme::Light,
            primary: ColorRole {
                main: c.deep_blue,
                light: c.accent_blue,
                dark: c.dark_navy,
                contrast_text: c.pure_white,
            },
            secondary: ColorRole {
                main: c.accent_blue,
                light: c.bright_blue,
                dark: c.navy_blue,
                contrast_text: c.pure_white,
            },
            background: BackgroundRole {
                default: c.matte_white,
                paper: c.pure_white,
            },
            text: TextRole {
                primary: c.charcoal,
                secondary: c.dark_gray,
            },
            divider: c.silver,
            error: c.error,
            warning: c.warning,
            info: c.info,
            success: c.success,
        };

        let components = ComponentOverrides {
            baseline: BaselineOverrides {
                body_background: c.matte_white,
                body_color: c.charcoal,
                font_family: BODY_FAMILY,
                scrollbar_width: 8.0,
                scrollbar_thumb: c.silver,
                scrollbar_thumb_hover: c.dark_gray,
            },
            button: ButtonOverrides {
                radius: 12.0,
                padding: Padding::new(14.0, 28.0),
                font_size_rem: 0.875,
                font_weight: 600,
                transition: Transition::standard(200),
                hover: Interaction {
                    translate_y: Some(-1.0),
                    shadow: Some(Shadow::single(ShadowLayer::drop(
                        8.0,
                        16.0,
                        0.0,
                        tint.with_alpha(0.12),
                    ))),
                    ..Interaction::default()
                },
                active: Interaction {
                    translate_y: Some(0.0),
                    ..Interaction::default()
                },
                contained: ButtonVariantOverrides {
                    background: c.deep_blue,
                    color: c.pure_white,
                    border: None,
                    hover: Interaction {
                        background: Some(c.navy_blue),
                        shadow: Some(Shadow::single(ShadowLayer::drop(
                            12.0,
                            24.0,
                            0.0,
                            Color::rgb(26, 35, 126).with_alpha(0.15),
                        ))),
                        ..Interaction::default()
                    },
                    disabled: Some(Interaction {
                        background: Some(c.light_gray),
                        color: Some(c.dark_gray),
                        ..Interaction::default()
                    }),
                },
                outlined: ButtonVariantOverrides {
                    background: Color::TRANSPARENT,
                    color: c.deep_blue,
                    border: Some(Border::solid(2.0, c.deep_blue)),
                    hover: Interaction {
                        background: Some(c.deep_blue),
                        color: Some(c.pure_white),
                        border_color: Some(c.deep_blue),
                        ..Interaction::default()
                    },
                    disabled: None,
                },
                text: ButtonVariantOverrides {
                    background: Color::TRANSPARENT,
                    color: c.deep_blue,
                    border: None,
                    hover: Interaction {
                        background: Some(c.light_gray),
                        ..Interaction::default()
                    },
                    disabled: None,
                },
            },
            card: CardOverrides {
                radius: 16.0,
                border: Border::solid(1.0, c.silver),
                background: c.pure_white,
                shadow: Shadow::single(ShadowLayer::drop(2.0, 8.0, 0.0, tint.with_alpha(0.04))),
                transition: Transition::standard(300),
                hover: Interaction {
                    translate_y: Some(-4.0),
                    shadow: Some(Shadow::single(ShadowLayer::drop(
                        16.0,
                        32.0,
                        0.0,
                        tint.with_alpha(0.08),
                    ))),
                    border_color: Some(c.accent_blue),
                    ..Interaction::default()
                },
            },
            app_bar: AppBarOverrides {
                background: c.matte_white.with_alpha(0.95),
                backdrop_filter: "blur(16px) saturate(180%)",
                border_bottom: Border::solid(1.0, c.silver),
                color: c.charcoal,
                shadow: Shadow::single(ShadowLayer::drop(1.0, 3.0, 0.0, tint.with_alpha(0.04))),
            },
            chip: ChipOverrides {
                radius: 24.0,
                font_weight: 500,
                font_family: BODY_FAMILY,
                font_size_rem: 0.875,
                filled: ChipVariantOverrides {
                    background: Some(c.light_gray),
                    border_color: None,
                    color: c.deep_blue,
                    hover: Interaction {
                        background: Some(c.silver),
                        ..Interaction::default()
                    },
                },
                outlined: ChipVariantOverrides {
                    background: None,
                    border_color: Some(c.silver),
                    color: c.slate,
                    hover: Interaction {
                        background: Some(c.light_gray),
                        border_color: Some(c.accent_blue),
                        ..Interaction::default()
                    },
                },
            },
            paper: PaperOverrides {
                background: c.pure_white,
                radius: 16.0,
                elevation: [
                    Shadow::single(ShadowLayer::drop(2.0, 8.0, 0.0, tint.with_alpha(0.04))),
                    Shadow::single(ShadowLayer::drop(4.0, 12.0, 0.0, tint.with_alpha(0.06))),
                    Shadow::single(ShadowLayer::drop(8.0, 24.0, 0.0, tint.with_alpha(0.08))),
                ],
            },
            text_field: TextFieldOverrides {
                radius: 12.0,
                background: c.pure_white,
                border: Border::solid(2.0, c.silver),
                hover_border_color: c.accent_blue,
                focus_border: Border::solid(2.0, c.deep_blue),
                label_color: c.dark_gray,
                label_focus_color: c.deep_blue,
                label_font_family: BODY_FAMILY,
            },
            icon_button: IconButtonOverrides {
                radius: 12.0,
                transition: Transition::standard(200),
                hover: Interaction {
                    background: Some(c.light_gray),
                    scale: Some(1.05),
                    ..Interaction::default()
                },
            },
        };

        Self {
            name: THEME_NAME,
            scheme: ColorScheme::Light,
            palette,
            typography: TypographyTokens::new(c.charcoal, c.slate, c.dark_gray),
            shape_radius: 12.0,
            spacing: SpacingTokens::default(),
            radii: RadiusTokens::default(),
            shadows: ShadowScale::new(tint),
            components,
        }
    }

    /// The dark variant: the light theme with dark palette roles and surfaces
    pub fn dark() -> Self {
        let c = &PALETTE;
        let mut theme = Self::light();

        theme.scheme = ColorScheme::Dark;
        theme.palette = PaletteRoles {
            mode: ColorScheme::Dark,
            primary: ColorRole {
                main: c.accent_blue,
                light: c.bright_blue,
                dark: c.deep_blue,
                contrast_text: c.pure_white,
            },
            secondary: ColorRole {
                main: c.platinum,
                light: c.silver,
                dark: c.dark_gray,
                contrast_text: c.charcoal,
            },
            background: BackgroundRole {
                default: c.dark_navy,
                paper: c.charcoal,
            },
            text: TextRole {
                primary: c.pure_white,
                secondary: c.silver,
            },
            divider: c.graphite,
            ..theme.palette
        };
        theme.typography = TypographyTokens::new(c.pure_white, c.silver, c.silver);

        let components = &mut theme.components;

        components.baseline.body_background = c.dark_navy;
        components.baseline.body_color = c.pure_white;
        components.baseline.scrollbar_thumb = c.graphite;
        components.baseline.scrollbar_thumb_hover = c.silver;

        components.app_bar.background = c.dark_navy.with_alpha(0.95);
        components.app_bar.border_bottom = Border::solid(1.0, c.graphite);
        components.app_bar.color = c.pure_white;
        components.app_bar.shadow = Shadow::none();

        components.card.background = c.charcoal;
        components.card.border.color = c.graphite;
        components.card.hover.border_color = Some(c.accent_blue);

        components.paper.background = c.charcoal;

        components.button.contained.background = c.accent_blue;
        components.button.contained.hover.background = Some(c.bright_blue);
        components.button.outlined.color = c.accent_blue;
        components.button.outlined.border = Some(Border::solid(2.0, c.accent_blue));
        components.button.outlined.hover.background = Some(c.accent_blue);
        components.button.outlined.hover.color = Some(c.pure_white);
        components.button.outlined.hover.border_color = Some(c.accent_blue);

        theme
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.scheme.is_dark()
    }
}

/// The light/dark pair
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeBundle {
    pub light: Theme,
    pub dark: Theme,
}

static SHARED_BUNDLE: OnceLock<ThemeBundle> = OnceLock::new();

impl ThemeBundle {
    /// Build a fresh bundle
    pub fn standard() -> Self {
        Self {
            light: Theme::light(),
            dark: Theme::dark(),
        }
    }

    /// The process-wide bundle, built on first use
    pub fn shared() -> &'static ThemeBundle {
        SHARED_BUNDLE.get_or_init(|| {
            tracing::debug!("building shared theme bundle");
            Self::standard()
        })
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &Theme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scheme_toggles_and_parses() {
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggle().toggle(), ColorScheme::Dark);
        assert_eq!("dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert!("sepia".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn dark_inherits_untouched_components() {
        let light = Theme::light();
        let dark = Theme::dark();
        assert_eq!(dark.components.text_field, light.components.text_field);
        assert_eq!(dark.components.icon_button, light.components.icon_button);
        assert_eq!(dark.components.chip, light.components.chip);
        assert_eq!(dark.shadows, light.shadows);
        assert_eq!(dark.palette.error, light.palette.error);
        assert_eq!(dark.components.card.radius, light.components.card.radius);
    }

    #[test]
    fn dark_overrides_surfaces_and_text() {
        let dark = Theme::dark();
        assert_eq!(dark.scheme, ColorScheme::Dark);
        assert_eq!(dark.palette.mode, ColorScheme::Dark);
        assert_eq!(dark.palette.text.primary, PALETTE.pure_white);
        assert_eq!(dark.palette.background.default, PALETTE.dark_navy);
        assert_eq!(dark.components.card.background, PALETTE.charcoal);
        assert!(dark.components.app_bar.shadow.is_none());
        assert_eq!(
            dark.components.app_bar.background.to_string(),
            "rgba(13, 19, 33, 0.95)"
        );
    }

    #[test]
    fn light_button_overrides_render_css() {
        let button = Theme::light().components.button;
        assert_eq!(button.padding.to_string(), "14px 28px");
        assert_eq!(button.transition.to_string(), "all 0.2s cubic-bezier(0.4, 0, 0.2, 1)");
        assert_eq!(
            button.outlined.border.map(|b| b.to_string()).as_deref(),
            Some("2px solid #1a237e")
        );
    }

    #[test]
    fn shared_bundle_is_built_once() {
        let a = ThemeBundle::shared() as *const ThemeBundle;
        let b = ThemeBundle::shared() as *const ThemeBundle;
        assert_eq!(a, b);
        assert_eq!(ThemeBundle::shared().for_scheme(ColorScheme::Dark).scheme, ColorScheme::Dark);
    }
}
