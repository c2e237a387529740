//! Derived style accessor
//!
//! Resolves semantic style requests against the store's current mode. The
//! flag is re-read on every call and nothing is cached, so a toggle is visible
//! to the very next query. Each bundle method reads the flag once, so a single
//! bundle never mixes values from both modes.

use std::sync::Arc;

use tracing::trace;

use super::bundles::*;
use super::variants::*;
use crate::error::Result;
use crate::palette::{Color, PALETTE};
use crate::store::ThemeStore;
use crate::theme::{Border, ColorScheme, Interaction, Padding, Transition};
use crate::tokens::*;

/// Backdrop used by the translucent app bar
const APP_BAR_BACKDROP: &str = "blur(16px) saturate(180%)";

/// Resolved-style handle over a theme store
#[derive(Clone, Debug)]
pub struct StyleAccessor {
    store: Arc<ThemeStore>,
}

impl StyleAccessor {
    pub fn new(store: Arc<ThemeStore>) -> Self {
        Self { store }
    }

    /// Accessor pinned to `scheme` through a private store
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        Self::new(Arc::new(ThemeStore::with_scheme(scheme)))
    }

    pub fn is_dark_mode(&self) -> bool {
        self.store.is_dark_mode()
    }

    pub fn scheme(&self) -> ColorScheme {
        self.store.scheme()
    }

    pub fn colors(&self) -> &'static crate::palette::Palette {
        &PALETTE
    }

    // ========== Colors ==========

    pub fn text_color(&self, variant: TextVariant) -> Color {
        let c = &PALETTE;
        let dark = self.is_dark_mode();
        trace!(%variant, dark, "resolving text color");
        match variant {
            TextVariant::Primary => pick(dark, c.charcoal, c.pure_white),
            TextVariant::Secondary => pick(dark, c.dark_gray, c.silver),
            TextVariant::Accent => pick(dark, c.deep_blue, c.accent_blue),
        }
    }

    pub fn background_color(&self, variant: BackgroundVariant) -> Color {
        let c = &PALETTE;
        let dark = self.is_dark_mode();
        trace!(%variant, dark, "resolving background");
        match variant {
            BackgroundVariant::Primary => pick(dark, c.matte_white, c.dark_navy),
            BackgroundVariant::Secondary => pick(dark, c.pure_white, c.charcoal),
            BackgroundVariant::Elevated => pick(dark, c.platinum, c.graphite),
        }
    }

    /// `Hover` is the accent in both modes
    pub fn border_color(&self, variant: BorderVariant) -> Color {
        let c = &PALETTE;
        let dark = self.is_dark_mode();
        trace!(%variant, dark, "resolving border color");
        match variant {
            BorderVariant::Default => pick(dark, c.silver, c.graphite),
            BorderVariant::Hover => c.accent_blue,
            BorderVariant::Focus => pick(dark, c.deep_blue, c.bright_blue),
        }
    }

    /// `None` is the literal absence of a shadow
    pub fn shadow(&self, elevation: Elevation) -> Shadow {
        let dark = self.is_dark_mode();
        trace!(%elevation, dark, "resolving shadow");
        if dark {
            let layer = |y, blur, alpha| {
                Shadow::single(ShadowLayer::drop(y, blur, 0.0, DARK_SHADOW_TINT.with_alpha(alpha)))
            };
            match elevation {
                Elevation::None => Shadow::none(),
                Elevation::Low => layer(2.0, 8.0, 0.15),
                Elevation::Medium => layer(8.0, 24.0, 0.2),
                Elevation::High => layer(16.0, 48.0, 0.3),
            }
        } else {
            let scale = &self.store.bundle().light.shadows;
            match elevation {
                Elevation::None => Shadow::none(),
                Elevation::Low => scale.get(1).clone(),
                Elevation::Medium => scale.get(3).clone(),
                Elevation::High => scale.get(5).clone(),
            }
        }
    }

    // ========== String queries ==========

    /// `None` means `primary`
    pub fn get_text_color(&self, variant: Option<&str>) -> Result<Color> {
        parse_variant(variant).map(|v| self.text_color(v))
    }

    /// `None` means `primary`
    pub fn get_background_color(&self, variant: Option<&str>) -> Result<Color> {
        parse_variant(variant).map(|v| self.background_color(v))
    }

    /// `None` means `default`
    pub fn get_border_color(&self, variant: Option<&str>) -> Result<Color> {
        parse_variant(variant).map(|v| self.border_color(v))
    }

    /// `None` means `low`
    pub fn get_shadow(&self, elevation: Option<&str>) -> Result<Shadow> {
        parse_variant(elevation).map(|v| self.shadow(v))
    }

    pub fn get_button_style(&self, variant: Option<&str>) -> Result<ButtonStyle> {
        let variant: ButtonVariant = parse_variant(variant)?;
        Ok(self.button_style().get(variant).clone())
    }

    /// `None` means `filled`
    pub fn get_chip_style(&self, variant: Option<&str>) -> Result<ChipStyle> {
        parse_variant(variant).map(|v| self.chip_style(v))
    }

    /// `None` means `h1`
    pub fn get_heading_style(&self, level: Option<&str>) -> Result<TextStyle> {
        parse_variant(level).map(|l| self.heading_style(l))
    }

    /// `None` means `body1`
    pub fn get_body_style(&self, variant: Option<&str>) -> Result<TextStyle> {
        parse_variant(variant).map(|v| self.body_style(v))
    }

    // ========== Bundles ==========

    pub fn card_style(&self) -> CardStyle {
        let c = &PALETTE;
        let dark = self.is_dark_mode();
        let tint = LIGHT_SHADOW_TINT;
        CardStyle {
            background: pick(dark, c.pure_white, c.charcoal),
            border: Border::solid(1.0, pick(dark, c.silver, c.graphite)),
            radius: 16.0,
            shadow: Shadow::single(pick(
                dark,
                ShadowLayer::drop(2.0, 8.0, 0.0, tint.with_alpha(0.04)),
                ShadowLayer::drop(4.0, 16.0, 0.0, DARK_SHADOW_TINT.with_alpha(0.2)),
            )),
            transition: Transition::standard(300),
            hover: Interaction {
                translate_y: Some(-4.0),
                shadow: Some(Shadow::single(pick(
                    dark,
                    ShadowLayer::drop(16.0, 32.0, 0.0, tint.with_alpha(0.08)),
                    ShadowLayer::drop(8.0, 32.0, 0.0, DARK_SHADOW_TINT.with_alpha(0.3)),
                ))),
                border_color: Some(c.accent_blue),
                ..Interaction::default()
            },
        }
    }

    pub fn button_style(&self) -> ButtonStyles {
        let c = &PALETTE;
        let dark = self.is_dark_mode();
        let brand = pick(dark, c.deep_blue, c.accent_blue);

        let primary = ButtonStyle {
            background: brand,
            color: c.pure_white,
            border: None,
            radius: 12.0,
            padding: Padding::new(14.0, 28.0),
            font_weight: 600,
            font_size_rem: 0.875,
            font_family: BODY_FAMILY,
            shadow: Some(Shadow::none()),
            transition: Some(Transition::standard(200)),
            hover: Interaction {
                background: Some(pick(dark, c.navy_blue, c.bright_blue)),
                translate_y: Some(-1.0),
                shadow: Some(Shadow::single(ShadowLayer::drop(
                    12.0,
                    24.0,
                    0.0,
                    pick(dark, Color::rgb(26, 35, 126), Color::rgb(59, 130, 246)).with_alpha(0.15),
                ))),
                ..Interaction::default()
            },
            active: Some(Interaction {
                translate_y: Some(0.0),
                ..Interaction::default()
            }),
        };

        let secondary = ButtonStyle {
            background: Color::TRANSPARENT,
            color: brand,
            border: Some(Border::solid(2.0, brand)),
            padding: Padding::new(12.0, 26.0),
            shadow: None,
            hover: Interaction {
                background: Some(brand),
                color: Some(c.pure_white),
                translate_y: Some(-1.0),
                ..Interaction::default()
            },
            active: None,
            ..primary.clone()
        };

        let text = ButtonStyle {
            background: Color::TRANSPARENT,
            color: brand,
            border: None,
            shadow: None,
            transition: None,
            hover: Interaction {
                background: Some(pick(dark, c.light_gray, c.graphite)),
                ..Interaction::default()
            },
            active: None,
            ..primary.clone()
        };

        ButtonStyles {
            primary,
            secondary,
            text,
        }
    }

    pub fn chip_style(&self, variant: ChipVariant) -> ChipStyle {
        let c = &PALETTE;
        let dark = self.is_dark_mode();
        let base = ChipStyle {
            radius: 24.0,
            font_weight: 500,
            font_family: BODY_FAMILY,
            font_size_rem: 0.875,
            background: None,
            border_color: None,
            color: c.pure_white,
            hover: Interaction::default(),
        };
        match variant {
            ChipVariant::Filled => ChipStyle {
                background: Some(pick(dark, c.light_gray, c.graphite)),
                color: pick(dark, c.deep_blue, c.pure_white),
                hover: Interaction {
                    background: Some(pick(dark, c.silver, c.slate)),
                    ..Interaction::default()
                },
                ..base
            },
            ChipVariant::Outlined => ChipStyle {
                border_color: Some(pick(dark, c.silver, c.graphite)),
                color: pick(dark, c.slate, c.silver),
                hover: Interaction {
                    background: Some(pick(dark, c.light_gray, c.graphite)),
                    border_color: Some(c.accent_blue),
                    ..Interaction::default()
                },
                ..base
            },
        }
    }

    pub fn app_bar_style(&self) -> AppBarStyle {
        let c = &PALETTE;
        let dark = self.is_dark_mode();
        AppBarStyle {
            background: pick(dark, c.matte_white, c.dark_navy).with_alpha(0.95),
            backdrop_filter: APP_BAR_BACKDROP,
            border_bottom: Border::solid(1.0, pick(dark, c.silver, c.graphite)),
            color: pick(dark, c.charcoal, c.pure_white),
            shadow: Shadow::single(ShadowLayer::drop(
                1.0,
                3.0,
                0.0,
                pick(dark, LIGHT_SHADOW_TINT.with_alpha(0.04), DARK_SHADOW_TINT.with_alpha(0.3)),
            )),
        }
    }

    pub fn section_style(&self) -> SectionStyle {
        SectionStyle {
            background: self.background_color(BackgroundVariant::Primary),
            padding: Padding::new(80.0, 0.0),
            position: "relative",
        }
    }

    pub fn text_styles(&self) -> TextStyles {
        let c = &PALETTE;
        let dark = self.is_dark_mode();
        TextStyles {
            primary: ThemedText {
                color: pick(dark, c.charcoal, c.pure_white),
                font_family: HEADING_FAMILY,
            },
            secondary: ThemedText {
                color: pick(dark, c.dark_gray, c.silver),
                font_family: BODY_FAMILY,
            },
            accent: ThemedText {
                color: pick(dark, c.deep_blue, c.accent_blue),
                font_family: HEADING_FAMILY,
            },
        }
    }

    pub fn heading_style(&self, level: HeadingLevel) -> TextStyle {
        let level = level.get();
        let (size, line_height) = match level {
            1 => (3.5, 1.1),
            2 => (2.75, 1.2),
            3 => (2.25, 1.3),
            4 => (1.875, 1.4),
            5 => (1.5, 1.5),
            _ => (1.25, 1.6),
        };
        let tracking = match level {
            1 | 2 => -0.02,
            3 => -0.01,
            _ => 0.0,
        };
        TextStyle {
            font_family: HEADING_FAMILY,
            font_size_rem: size,
            font_weight: Some(if level <= 2 { 700 } else { 600 }),
            line_height: Some(line_height),
            letter_spacing_em: tracking,
            color: Some(self.text_color(TextVariant::Primary)),
        }
    }

    pub fn body_style(&self, variant: BodyVariant) -> TextStyle {
        let c = &PALETTE;
        let dark = self.is_dark_mode();
        let (size, line_height, tracking, light_color) = match variant {
            BodyVariant::Body1 => (1.0, 1.7, 0.0, c.slate),
            BodyVariant::Body2 => (0.875, 1.6, 0.0, c.dark_gray),
            BodyVariant::Caption => (0.75, 1.5, 0.03, c.dark_gray),
        };
        TextStyle {
            font_family: BODY_FAMILY,
            font_size_rem: size,
            font_weight: None,
            line_height: Some(line_height),
            letter_spacing_em: tracking,
            color: Some(pick(dark, light_color, c.silver)),
        }
    }

    // ========== Scales ==========

    pub fn spacing(&self) -> &'static SpacingTokens {
        &self.store.current_theme().spacing
    }

    pub fn radii(&self) -> &'static RadiusTokens {
        &self.store.current_theme().radii
    }

    pub fn font_families(&self) -> &'static FontFamilies {
        &self.store.current_theme().typography.families
    }

    pub fn font_weight(&self, weight: FontWeight) -> u16 {
        weight.value()
    }

    pub fn get_font_weight(&self, name: &str) -> Result<u16> {
        name.parse::<FontWeight>().map(FontWeight::value)
    }
}

fn pick<T>(dark: bool, light_value: T, dark_value: T) -> T {
    if dark {
        dark_value
    } else {
        light_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn light() -> StyleAccessor {
        StyleAccessor::for_scheme(ColorScheme::Light)
    }

    fn dark() -> StyleAccessor {
        StyleAccessor::for_scheme(ColorScheme::Dark)
    }

    #[test]
    fn text_primary_literals() {
        assert_eq!(light().text_color(TextVariant::Primary).to_string(), "#1e293b");
        assert_eq!(dark().text_color(TextVariant::Primary).to_string(), "#ffffff");
    }

    #[test]
    fn background_ramp_is_distinct_per_mode() {
        for styles in [light(), dark()] {
            let ramp: Vec<Color> = BackgroundVariant::ALL
                .iter()
                .map(|v| styles.background_color(*v))
                .collect();
            assert_eq!(ramp.len(), 3);
            assert_ne!(ramp[0], ramp[1]);
            assert_ne!(ramp[1], ramp[2]);
            assert_ne!(ramp[0], ramp[2]);
        }
    }

    #[test]
    fn shadow_literals() {
        assert_eq!(light().shadow(Elevation::None).to_string(), "none");
        assert_eq!(dark().shadow(Elevation::None).to_string(), "none");
        assert_eq!(
            light().shadow(Elevation::Low).to_string(),
            "0 1px 2px rgba(30, 41, 59, 0.04)"
        );
        assert_eq!(
            dark().shadow(Elevation::Low).to_string(),
            "0 2px 8px rgba(0, 0, 0, 0.15)"
        );
    }

    #[test]
    fn shadow_blur_increases_with_elevation() {
        for styles in [light(), dark()] {
            let blurs: Vec<f32> = [Elevation::Low, Elevation::Medium, Elevation::High]
                .iter()
                .map(|e| styles.shadow(*e).max_blur())
                .collect();
            assert!(blurs.windows(2).all(|w| w[0] < w[1]), "{blurs:?}");
        }
    }

    #[test]
    fn buttons_share_brand_color() {
        let buttons = dark().button_style();
        assert_eq!(buttons.primary.background, PALETTE.accent_blue);
        assert_eq!(buttons.secondary.color, PALETTE.accent_blue);
        assert_eq!(buttons.text.color, PALETTE.accent_blue);
        assert_eq!(buttons.secondary.padding.to_string(), "12px 26px");
        assert_eq!(buttons.text.hover.background, Some(PALETTE.graphite));
        assert_eq!(
            buttons.get(ButtonVariant::Secondary).border,
            Some(Border::solid(2.0, PALETTE.accent_blue))
        );
    }

    #[test]
    fn chips_follow_mode() {
        let filled = light().chip_style(ChipVariant::Filled);
        assert_eq!(filled.background, Some(PALETTE.light_gray));
        assert_eq!(filled.color, PALETTE.deep_blue);
        let outlined = dark().chip_style(ChipVariant::Outlined);
        assert_eq!(outlined.border_color, Some(PALETTE.graphite));
        assert_eq!(outlined.hover.border_color, Some(PALETTE.accent_blue));
        assert!(outlined.background.is_none());
    }

    #[test]
    fn heading_weights_and_tracking() {
        let styles = dark();
        let h2 = styles.heading_style(HeadingLevel::new(2).unwrap());
        assert_eq!(h2.font_weight, Some(700));
        assert_eq!(h2.letter_spacing(), "-0.02em");
        assert_eq!(h2.color, Some(PALETTE.pure_white));
        let h5 = styles.heading_style(HeadingLevel::new(5).unwrap());
        assert_eq!(h5.font_weight, Some(600));
        assert_eq!(h5.letter_spacing_em, 0.0);
    }

    #[test]
    fn string_queries_default_and_reject() {
        let styles = light();
        assert_eq!(
            styles.get_border_color(None).unwrap(),
            styles.border_color(BorderVariant::Default)
        );
        assert_eq!(styles.get_heading_style(None).unwrap().font_size(), "3.5rem");
        assert!(styles.get_body_style(Some("body3")).is_err());
        assert!(styles.get_button_style(Some("ghost")).is_err());
        assert_eq!(styles.get_font_weight("medium").unwrap(), 500);
    }

    #[test]
    fn app_bar_is_translucent() {
        assert_eq!(
            light().app_bar_style().background.to_string(),
            "rgba(250, 251, 252, 0.95)"
        );
        assert_eq!(
            dark().app_bar_style().shadow.to_string(),
            "0 1px 3px rgba(0, 0, 0, 0.3)"
        );
    }
}
