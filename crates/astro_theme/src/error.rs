//! Theme error types

use thiserror::Error;

/// Errors raised by the theme core.
///
/// Every variant is a programming error on the caller's side; none of them is
/// caused by user input at runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// `use_theme()` / `use_style_accessor()` called with no active provider scope
    #[error("use_theme must be used within a theme provider scope")]
    OutsideProvider,

    /// A style query named a variant outside its enumerated set
    #[error("unknown {family} variant `{value}` (expected one of: {expected})")]
    UnknownVariant {
        family: &'static str,
        value: String,
        expected: String,
    },

    /// A color literal could not be parsed
    #[error("invalid color literal `{0}`")]
    InvalidColor(String),
}

impl ThemeError {
    pub(crate) fn unknown_variant(family: &'static str, value: &str, expected: &[&str]) -> Self {
        Self::UnknownVariant {
            family,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
