//! Enumerated style query variants
//!
//! Every query family accepts a closed set of variant names. Parsing a name
//! outside that set is an error, never a silent fallback.

use crate::error::{Result, ThemeError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

macro_rules! style_variant {
    (
        $(#[$meta:meta])*
        $name:ident, $family:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Query family name used in errors and exported keys
            pub const FAMILY: &'static str = $family;

            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = ThemeError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( $text => Ok(Self::$variant), )+
                    other => Err(ThemeError::unknown_variant(
                        $family,
                        other,
                        &[$( $text ),+],
                    )),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

style_variant! {
    /// Text color role
    TextVariant, "text color" {
        #[default]
        Primary => "primary",
        Secondary => "secondary",
        Accent => "accent",
    }
}

style_variant! {
    /// Background surface, a three-step elevation ramp
    BackgroundVariant, "background" {
        #[default]
        Primary => "primary",
        Secondary => "secondary",
        Elevated => "elevated",
    }
}

style_variant! {
    /// Border interaction state
    BorderVariant, "border color" {
        #[default]
        Default => "default",
        Hover => "hover",
        Focus => "focus",
    }
}

style_variant! {
    /// Shadow elevation
    Elevation, "shadow" {
        None => "none",
        #[default]
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

style_variant! {
    /// Button bundle flavour
    ButtonVariant, "button" {
        #[default]
        Primary => "primary",
        Secondary => "secondary",
        Text => "text",
    }
}

style_variant! {
    /// Chip bundle flavour
    ChipVariant, "chip" {
        #[default]
        Filled => "filled",
        Outlined => "outlined",
    }
}

style_variant! {
    /// Body copy style
    BodyVariant, "body text" {
        #[default]
        Body1 => "body1",
        Body2 => "body2",
        Caption => "caption",
    }
}

/// Heading level, `h1` through `h6`
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const FAMILY: &'static str = "heading level";

    pub const H1: HeadingLevel = HeadingLevel(1);
    pub const H6: HeadingLevel = HeadingLevel(6);

    pub fn new(level: u8) -> Result<Self> {
        if (1..=6).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ThemeError::unknown_variant(
                Self::FAMILY,
                &level.to_string(),
                &["1", "2", "3", "4", "5", "6"],
            ))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = HeadingLevel> {
        (1..=6).map(HeadingLevel)
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::H1
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}

impl FromStr for HeadingLevel {
    type Err = ThemeError;

    /// Accepts `3` or `h3`
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('h').unwrap_or(s);
        match digits.as_bytes() {
            [d @ b'1'..=b'6'] => Ok(Self(d - b'0')),
            _ => Err(bad_heading(s)),
        }
    }
}

fn bad_heading(s: &str) -> ThemeError {
    ThemeError::unknown_variant(
        HeadingLevel::FAMILY,
        s,
        &["h1", "h2", "h3", "h4", "h5", "h6"],
    )
}

/// Parse an optional variant name, applying the family default for `None`
pub fn parse_variant<V>(value: Option<&str>) -> Result<V>
where
    V: FromStr<Err = ThemeError> + Default,
{
    match value {
        Some(name) => name.parse(),
        None => Ok(V::default()),
    }
}
