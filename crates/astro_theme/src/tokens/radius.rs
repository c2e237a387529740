//! Border radius tokens

use super::px;
use serde::Serialize;

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    Sm,
    Md,
    Lg,
    Xl,
    Full,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 5] = [
        RadiusToken::Sm,
        RadiusToken::Md,
        RadiusToken::Lg,
        RadiusToken::Xl,
        RadiusToken::Full,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Full => "full",
        }
    }
}

/// Border radii in px; `full` is a percentage for circles and pills
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadiusTokens {
    pub radius_sm: f32,
    /// Matches the theme shape radius
    pub radius_md: f32,
    /// Card and paper radius
    pub radius_lg: f32,
    /// Chip radius
    pub radius_xl: f32,
    pub radius_full_percent: f32,
}

impl RadiusTokens {
    /// Get radius by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
            RadiusToken::Xl => self.radius_xl,
            RadiusToken::Full => self.radius_full_percent,
        }
    }

    pub fn css(&self, token: RadiusToken) -> String {
        match token {
            RadiusToken::Full => format!("{}%", self.radius_full_percent),
            other => px(self.get(other)),
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_sm: 8.0,
            radius_md: 12.0,
            radius_lg: 16.0,
            radius_xl: 24.0,
            radius_full_percent: 50.0,
        }
    }
}
