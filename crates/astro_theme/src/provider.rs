//! Provider scope
//!
//! `provide_theme` makes a [`ThemeStore`] available to everything called inside
//! its closure on the current thread. `use_theme` and `use_style_accessor`
//! resolve the innermost active store and fail with
//! [`ThemeError::OutsideProvider`] when there is none.
//!
//! ```rust
//! use astro_theme::{provide_theme, use_theme, use_style_accessor, TextVariant};
//!
//! provide_theme(|| {
//!     let theme = use_theme().unwrap();
//!     theme.toggle();
//!
//!     let styles = use_style_accessor().unwrap();
//!     assert_eq!(styles.text_color(TextVariant::Primary).to_string(), "#ffffff");
//! });
//!
//! assert!(use_theme().is_err());
//! ```

use crate::error::{Result, ThemeError};
use crate::palette::{Palette, PALETTE};
use crate::store::{SubscriptionId, ThemeSnapshot, ThemeStore};
use crate::styles::StyleAccessor;
use crate::theme::{ColorScheme, Theme};
use std::cell::RefCell;
use std::sync::Arc;
use tracing::debug;

thread_local! {
    /// Stack of active provider scopes; innermost last
    static SCOPES: RefCell<Vec<Arc<ThemeStore>>> = const { RefCell::new(Vec::new()) };
}

/// Pops the scope pushed by `provide_store`, also on unwind
struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            scopes.borrow_mut().pop();
        });
    }
}

/// Run `children` inside a scope backed by a fresh light-mode store
pub fn provide_theme<R>(children: impl FnOnce() -> R) -> R {
    provide_store(ThemeStore::shared(), children)
}

/// Run `children` inside a scope backed by `store`
pub fn provide_store<R>(store: Arc<ThemeStore>, children: impl FnOnce() -> R) -> R {
    let depth = SCOPES.with(|scopes| {
        let mut scopes = scopes.borrow_mut();
        scopes.push(store);
        scopes.len()
    });
    debug!("entered theme provider scope (depth {})", depth);
    let _guard = ScopeGuard;
    children()
}

/// Store of the innermost active scope, if any
pub fn current_store() -> Option<Arc<ThemeStore>> {
    SCOPES.with(|scopes| scopes.borrow().last().cloned())
}

/// Read/mutate handle for the active theme store
pub fn use_theme() -> Result<ThemeHandle> {
    current_store()
        .map(ThemeHandle::new)
        .ok_or(ThemeError::OutsideProvider)
}

/// Resolved-style handle for the active theme store
pub fn use_style_accessor() -> Result<StyleAccessor> {
    use_theme().map(|handle| StyleAccessor::new(handle.into_store()))
}

/// What consumers see of the theme store
#[derive(Clone, Debug)]
pub struct ThemeHandle {
    store: Arc<ThemeStore>,
}

impl ThemeHandle {
    pub fn new(store: Arc<ThemeStore>) -> Self {
        Self { store }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.store.is_dark_mode()
    }

    pub fn state(&self) -> ThemeSnapshot {
        self.store.state()
    }

    pub fn scheme(&self) -> ColorScheme {
        self.store.scheme()
    }

    /// Flip the mode; returns the new scheme
    pub fn toggle(&self) -> ColorScheme {
        self.store.toggle()
    }

    /// The brand palette
    pub fn colors(&self) -> &'static Palette {
        &PALETTE
    }

    /// Descriptor for the current mode
    pub fn current_variant(&self) -> &'static Theme {
        self.store.current_theme()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(ColorScheme) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Style accessor over the same store
    pub fn styles(&self) -> StyleAccessor {
        StyleAccessor::new(Arc::clone(&self.store))
    }

    pub fn store(&self) -> &Arc<ThemeStore> {
        &self.store
    }

    pub fn into_store(self) -> Arc<ThemeStore> {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_provider_fails() {
        assert_eq!(use_theme().unwrap_err(), ThemeError::OutsideProvider);
        assert!(matches!(
            use_style_accessor(),
            Err(ThemeError::OutsideProvider)
        ));
    }

    #[test]
    fn scope_is_popped_after_children() {
        let value = provide_theme(|| use_theme().map(|t| t.is_dark_mode()));
        assert_eq!(value, Ok(false));
        assert!(current_store().is_none());
    }

    #[test]
    fn inner_scope_shadows_outer() {
        let outer = ThemeStore::shared();
        let inner = Arc::new(ThemeStore::with_scheme(ColorScheme::Dark));

        provide_store(Arc::clone(&outer), || {
            assert!(!use_theme().unwrap().is_dark_mode());
            provide_store(Arc::clone(&inner), || {
                assert!(use_theme().unwrap().is_dark_mode());
            });
            assert!(!use_theme().unwrap().is_dark_mode());
        });
    }

    #[test]
    fn handles_share_one_store() {
        provide_theme(|| {
            let a = use_theme().unwrap();
            let b = use_theme().unwrap();
            a.toggle();
            assert!(b.is_dark_mode());
            assert_eq!(b.current_variant().scheme, ColorScheme::Dark);
        });
    }

    #[test]
    fn scope_unwinds_on_panic() {
        let result = std::panic::catch_unwind(|| {
            provide_theme(|| panic!("render failed"));
        });
        assert!(result.is_err());
        assert!(current_store().is_none());
    }
}
