//! Derived style accessors
//!
//! [`StyleAccessor`] turns a semantic request ("secondary text", "elevated
//! surface", "medium shadow") plus the current mode into a concrete token.
//! Every variant of every family resolves in both modes.

mod accessor;
mod bundles;
mod variants;

pub use accessor::StyleAccessor;
pub use bundles::*;
pub use variants::*;
