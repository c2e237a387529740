//! Theme state store
//!
//! `ThemeStore` owns the only mutable theme state: a single dark-mode flag.
//! It is an explicit value handed to consumers through the provider scope, so
//! independent stores can coexist (one per app instance, one per test).
//!
//! - `toggle()` is the single writer path. The flag is flipped atomically, so
//!   readers see either the old or the new mode, never anything in between.
//! - Subscribers are notified synchronously inside `toggle()`, after the flip,
//!   in subscription order. The subscriber table is not locked while callbacks
//!   run, so a callback may read the store or (un)subscribe.
//! - Nothing is persisted: every store starts in light mode.

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, trace};

/// Callback invoked with the new scheme after every toggle
pub type SubscriberFn = Arc<dyn Fn(ColorScheme) + Send + Sync>;

/// Handle returned by [`ThemeStore::subscribe`]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct SubscriptionId(u64);

/// Point-in-time view of the store
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    pub is_dark_mode: bool,
}

impl ThemeSnapshot {
    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_dark_mode(self.is_dark_mode)
    }
}

/// Session-lifetime display mode state
pub struct ThemeStore {
    /// Current mode; `false` is light
    is_dark_mode: AtomicBool,

    /// Both variants, selected between by the flag
    bundle: &'static ThemeBundle,

    /// Registered change callbacks
    subscribers: RwLock<FxHashMap<SubscriptionId, SubscriberFn>>,

    /// Monotonic id source, also the notification order
    next_id: AtomicU64,
}

impl ThemeStore {
    /// New store in light mode
    pub fn new() -> Self {
        Self::with_scheme(ColorScheme::Light)
    }

    /// New store starting in `scheme`
    pub fn with_scheme(scheme: ColorScheme) -> Self {
        Self {
            is_dark_mode: AtomicBool::new(scheme.is_dark()),
            bundle: ThemeBundle::shared(),
            subscribers: RwLock::new(FxHashMap::default()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Convenience for sharing through a provider scope
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    // ========== Reads ==========

    pub fn state(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            is_dark_mode: self.is_dark_mode(),
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.is_dark_mode.load(Ordering::SeqCst)
    }

    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_dark_mode(self.is_dark_mode())
    }

    pub fn bundle(&self) -> &'static ThemeBundle {
        self.bundle
    }

    /// Descriptor matching the current mode
    pub fn current_theme(&self) -> &'static Theme {
        self.bundle.for_scheme(self.scheme())
    }

    // ========== Mutation ==========

    /// Flip the mode and notify subscribers; returns the new scheme
    pub fn toggle(&self) -> ColorScheme {
        let was_dark = self.is_dark_mode.fetch_xor(true, Ordering::SeqCst);
        let scheme = ColorScheme::from_dark_mode(!was_dark);
        debug!(
            "ThemeStore::toggle - switching from {} to {}",
            ColorScheme::from_dark_mode(was_dark),
            scheme
        );
        self.notify(scheme);
        scheme
    }

    fn notify(&self, scheme: ColorScheme) {
        let mut callbacks: Vec<(SubscriptionId, SubscriberFn)> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(id, cb)| (*id, Arc::clone(cb)))
            .collect();
        callbacks.sort_unstable_by_key(|(id, _)| *id);

        trace!("notifying {} theme subscribers", callbacks.len());
        for (_, callback) in callbacks {
            callback(scheme);
        }
    }

    // ========== Subscriptions ==========

    /// Register a callback run after every toggle
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(ColorScheme) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(callback));
        debug!("theme subscriber {:?} registered", id);
        id
    }

    /// Remove a callback; returns `false` if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some();
        if removed {
            debug!("theme subscriber {:?} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("is_dark_mode", &self.is_dark_mode())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
