//! Shadow tokens for theming

use super::px;
use crate::palette::Color;
use serde::{Serialize, Serializer};
use std::fmt;

/// One layer of a box shadow
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowLayer {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl ShadowLayer {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    /// Vertical drop shadow, the only kind the site uses
    pub const fn drop(offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self::new(0.0, offset_y, blur, spread, color)
    }
}

impl fmt::Display for ShadowLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            px(self.offset_x),
            px(self.offset_y),
            px(self.blur)
        )?;
        if self.spread != 0.0 {
            write!(f, " {}", px(self.spread))?;
        }
        write!(f, " {}", self.color)
    }
}

/// A box shadow: zero or more layers, rendered as a CSS `box-shadow` value
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shadow {
    layers: Vec<ShadowLayer>,
}

impl Shadow {
    /// The literal absence of a shadow (`none`)
    pub const fn none() -> Self {
        Self { layers: Vec::new() }
    }

    pub fn single(layer: ShadowLayer) -> Self {
        Self {
            layers: vec![layer],
        }
    }

    pub fn layered(layers: impl IntoIterator<Item = ShadowLayer>) -> Self {
        Self {
            layers: layers.into_iter().collect(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[ShadowLayer] {
        &self.layers
    }

    /// Largest blur radius across layers
    pub fn max_blur(&self) -> f32 {
        self.layers.iter().map(|l| l.blur).fold(0.0, f32::max)
    }
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.layers.is_empty() {
            return f.write_str("none");
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{layer}")?;
        }
        Ok(())
    }
}

impl Serialize for Shadow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Shadow tint used by the light theme (charcoal)
pub const LIGHT_SHADOW_TINT: Color = Color::rgb(30, 41, 59);

/// Shadow tint used by the dark theme
pub const DARK_SHADOW_TINT: Color = Color::BLACK;

/// `(offset_y, blur, spread, alpha)` for the single-layer upper steps of the scale
const UPPER_STEPS: [(f32, f32, f32, f32); 19] = [
    (25.0, 50.0, -12.0, 0.15),
    (35.0, 60.0, -12.0, 0.2),
    (45.0, 70.0, -12.0, 0.25),
    (60.0, 80.0, -12.0, 0.3),
    (80.0, 100.0, -12.0, 0.35),
    (100.0, 120.0, -12.0, 0.4),
    (120.0, 140.0, -12.0, 0.45),
    (140.0, 160.0, -12.0, 0.5),
    (160.0, 180.0, -12.0, 0.55),
    (180.0, 200.0, -12.0, 0.6),
    (200.0, 220.0, -12.0, 0.65),
    (220.0, 240.0, -12.0, 0.7),
    (240.0, 260.0, -12.0, 0.75),
    (260.0, 280.0, -12.0, 0.8),
    (280.0, 300.0, -12.0, 0.85),
    (300.0, 320.0, -12.0, 0.9),
    (320.0, 340.0, -12.0, 0.95),
    (340.0, 360.0, -12.0, 1.0),
    (360.0, 380.0, -12.0, 1.0),
];

/// Number of steps in the elevation scale (index 0 is `none`)
pub const SHADOW_SCALE_LEN: usize = 25;

/// The 25-step elevation scale shared by both variants
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShadowScale {
    steps: Vec<Shadow>,
}

impl ShadowScale {
    pub fn new(tint: Color) -> Self {
        let mut steps = Vec::with_capacity(SHADOW_SCALE_LEN);
        steps.push(Shadow::none());
        steps.push(Shadow::single(ShadowLayer::drop(
            1.0,
            2.0,
            0.0,
            tint.with_alpha(0.04),
        )));
        steps.push(Shadow::layered([
            ShadowLayer::drop(1.0, 3.0, 0.0, tint.with_alpha(0.08)),
            ShadowLayer::drop(1.0, 2.0, 0.0, tint.with_alpha(0.04)),
        ]));
        steps.push(Shadow::layered([
            ShadowLayer::drop(4.0, 6.0, -1.0, tint.with_alpha(0.08)),
            ShadowLayer::drop(2.0, 4.0, -1.0, tint.with_alpha(0.04)),
        ]));
        steps.push(Shadow::layered([
            ShadowLayer::drop(10.0, 15.0, -3.0, tint.with_alpha(0.08)),
            ShadowLayer::drop(4.0, 6.0, -2.0, tint.with_alpha(0.04)),
        ]));
        steps.push(Shadow::layered([
            ShadowLayer::drop(20.0, 25.0, -5.0, tint.with_alpha(0.08)),
            ShadowLayer::drop(10.0, 10.0, -5.0, tint.with_alpha(0.04)),
        ]));
        for (y, blur, spread, alpha) in UPPER_STEPS {
            steps.push(Shadow::single(ShadowLayer::drop(
                y,
                blur,
                spread,
                tint.with_alpha(alpha),
            )));
        }
        debug_assert_eq!(steps.len(), SHADOW_SCALE_LEN);
        Self { steps }
    }

    /// Shadow at `index`, clamped to the top of the scale
    pub fn get(&self, index: usize) -> &Shadow {
        &self.steps[index.min(self.steps.len() - 1)]
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shadow> {
        self.steps.iter()
    }
}

impl Default for ShadowScale {
    fn default() -> Self {
        Self::new(LIGHT_SHADOW_TINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn none_renders_literal() {
        assert_eq!(Shadow::none().to_string(), "none");
        assert!(Shadow::none().is_none());
    }

    #[test]
    fn layers_render_in_order() {
        let shadow = Shadow::layered([
            ShadowLayer::drop(4.0, 6.0, -1.0, LIGHT_SHADOW_TINT.with_alpha(0.08)),
            ShadowLayer::drop(2.0, 4.0, -1.0, LIGHT_SHADOW_TINT.with_alpha(0.04)),
        ]);
        assert_eq!(
            shadow.to_string(),
            "0 4px 6px -1px rgba(30, 41, 59, 0.08), 0 2px 4px -1px rgba(30, 41, 59, 0.04)"
        );
    }

    #[test]
    fn scale_has_25_steps_and_clamps() {
        let scale = ShadowScale::default();
        assert_eq!(scale.len(), SHADOW_SCALE_LEN);
        assert!(scale.get(0).is_none());
        assert_eq!(scale.get(100), scale.get(24));
        assert_eq!(
            scale.get(6).to_string(),
            "0 25px 50px -12px rgba(30, 41, 59, 0.15)"
        );
    }

    #[test]
    fn blur_grows_along_the_scale() {
        let scale = ShadowScale::default();
        let blurs: Vec<f32> = scale.iter().skip(5).map(Shadow::max_blur).collect();
        assert!(blurs.windows(2).all(|w| w[0] < w[1]));
    }
}
