//! Flash-free theme bootstrap.
//!
//! DESIGN
//! ======
//! Resolution runs synchronously, exactly once per page load, before any
//! body content is emitted or painted. Order: persisted choice (`light` or
//! `dark` only), then the environment signal, then light. It has no failure
//! path: a store that cannot be read counts as "nothing persisted".
//!
//! The only side effect is adding or removing the dark marker on the root
//! element. Other root classes and every other node are left alone.

use super::preference::{ResolvedTheme, parse_persisted};
use super::root::RootElement;
use super::signal::ColorSchemeSignal;
use super::store::PreferenceStore;

/// Resolve the theme without touching the DOM.
pub fn resolve(store: &dyn PreferenceStore, key: &str, signal: &dyn ColorSchemeSignal) -> ResolvedTheme {
    match store.get(key) {
        Ok(Some(raw)) => {
            if let Some(theme) = parse_persisted(&raw) {
                return theme;
            }
        }
        Ok(None) => {}
        Err(e) => {
            tracing::debug!(error = %e, key, "theme preference unreadable, using color-scheme signal");
        }
    }

    ResolvedTheme::from_dark(signal.prefers_dark().unwrap_or(false))
}

/// Resolve and apply the theme to `root`. Idempotent for fixed inputs.
pub fn bootstrap(
    store: &dyn PreferenceStore,
    key: &str,
    signal: &dyn ColorSchemeSignal,
    root: &mut RootElement,
) -> ResolvedTheme {
    let theme = resolve(store, key, signal);
    root.set_dark(theme.is_dark());
    theme
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BootstrapState {
    #[default]
    Unresolved,
    Resolved(ResolvedTheme),
}

/// One page load's bootstrap. Transitions `Unresolved -> Resolved` once.
#[derive(Debug, Clone)]
pub struct ThemeBootstrap {
    key: String,
    state: BootstrapState,
}

impl ThemeBootstrap {
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned(), state: BootstrapState::Unresolved }
    }

    #[must_use]
    pub fn state(&self) -> BootstrapState {
        self.state
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolve and apply on first call; later calls return the first result
    /// without reading the store or touching `root`.
    pub fn run(
        &mut self,
        store: &dyn PreferenceStore,
        signal: &dyn ColorSchemeSignal,
        root: &mut RootElement,
    ) -> ResolvedTheme {
        if let BootstrapState::Resolved(theme) = self.state {
            return theme;
        }
        let theme = bootstrap(store, &self.key, signal, root);
        self.state = BootstrapState::Resolved(theme);
        theme
    }
}

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod tests;
