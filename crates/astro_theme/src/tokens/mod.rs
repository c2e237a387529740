//! Design tokens for theming
//!
//! Tokens are the atomic values underneath the theme descriptors:
//! - Spacing (margins, padding)
//! - Border radii
//! - Shadows and the elevation scale
//! - Typography (families, sizes, weights)

mod radius;
mod shadow;
mod spacing;
mod typography;

pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;

/// Format a pixel length the way CSS shorthand expects (`0` stays unitless)
pub(crate) fn px(value: f32) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}px")
    }
}
