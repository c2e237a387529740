//! AstroMANIA Theme Core
//!
//! Light/dark theming for the AstroMANIA site: a brand palette, two immutable
//! theme descriptors, a session-scoped mode store and a derived style accessor.
//!
//! # Overview
//!
//! - **Palette**: named brand colors, the single source of every token
//! - **Theme descriptors**: light and dark [`Theme`]s with component overrides
//! - **Theme store**: one dark-mode flag, a toggle and change subscriptions
//! - **Style accessor**: semantic queries resolved against the current mode
//!
//! # Quick Start
//!
//! ```rust
//! use astro_theme::{provide_theme, use_style_accessor, use_theme, Elevation};
//!
//! provide_theme(|| {
//!     let theme = use_theme().unwrap();
//!     let styles = use_style_accessor().unwrap();
//!
//!     assert_eq!(styles.get_text_color(None).unwrap().to_string(), "#1e293b");
//!
//!     theme.toggle();
//!     assert_eq!(styles.get_text_color(None).unwrap().to_string(), "#ffffff");
//!     assert_eq!(styles.shadow(Elevation::None).to_string(), "none");
//! });
//! ```
//!
//! # Reactivity
//!
//! Consumers that need to re-render register a callback with
//! [`ThemeStore::subscribe`]; it runs synchronously inside every toggle. The
//! accessor never caches, so any read after a toggle sees the new mode.
//!
//! # Errors
//!
//! Only programming errors exist: using the theme outside a provider scope
//! ([`ThemeError::OutsideProvider`]) and naming a variant outside its set
//! ([`ThemeError::UnknownVariant`]).

pub mod css;
pub mod error;
pub mod palette;
pub mod provider;
pub mod store;
pub mod styles;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use error::{Result, ThemeError};
pub use palette::{Color, Palette, PALETTE};
pub use provider::{
    current_store, provide_store, provide_theme, use_style_accessor, use_theme, ThemeHandle,
};
pub use store::{SubscriberFn, SubscriptionId, ThemeSnapshot, ThemeStore};
pub use styles::*;
pub use theme::{ColorScheme, Theme, ThemeBundle};
pub use tokens::*;
