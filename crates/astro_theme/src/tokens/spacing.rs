//! Spacing tokens

use super::px;
use serde::Serialize;

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Section,
    Container,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 8] = [
        SpacingToken::Xs,
        SpacingToken::Sm,
        SpacingToken::Md,
        SpacingToken::Lg,
        SpacingToken::Xl,
        SpacingToken::Xxl,
        SpacingToken::Section,
        SpacingToken::Container,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
            Self::Section => "section",
            Self::Container => "container",
        }
    }
}

/// 8px-based spacing scale (values in px)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpacingTokens {
    pub unit: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub section: f32,
    pub container: f32,
}

impl SpacingTokens {
    /// Get spacing by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
            SpacingToken::Section => self.section,
            SpacingToken::Container => self.container,
        }
    }

    /// `factor` multiples of the base unit, like `theme.spacing(n)`
    pub fn scale(&self, factor: f32) -> f32 {
        self.unit * factor
    }

    pub fn css(&self, token: SpacingToken) -> String {
        px(self.get(token))
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            unit: 8.0,
            xs: 8.0,
            sm: 16.0,
            md: 24.0,
            lg: 32.0,
            xl: 48.0,
            xxl: 64.0,
            section: 80.0,
            container: 120.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_steps_are_multiples_of_the_unit() {
        let spacing = SpacingTokens::default();
        assert_eq!(spacing.get(SpacingToken::Xs), spacing.scale(1.0));
        assert_eq!(spacing.get(SpacingToken::Md), spacing.scale(3.0));
        assert_eq!(spacing.get(SpacingToken::Xxl), spacing.scale(8.0));
        assert_eq!(spacing.css(SpacingToken::Section), "80px");
    }
}
