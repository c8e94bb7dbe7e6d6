//! Theme provider: owns theme state once the page is mounted.
//!
//! The provider is mounted with whatever the bootstrap resolved, so its first
//! render matches the root element and produces no visible change. After that
//! it is the only writer of the persisted preference.

use serde::Serialize;

use crate::theme::{ColorSchemeSignal, PreferenceStore, ResolvedTheme, RootElement, ThemePreference};

/// Snapshot handed to the client for hydration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeContext {
    pub preference: ThemePreference,
    pub resolved: ResolvedTheme,
    pub storage_key: String,
}

#[derive(Debug)]
pub struct ThemeProvider<S> {
    store: S,
    key: String,
    preference: ThemePreference,
    resolved: ResolvedTheme,
}

impl<S: PreferenceStore> ThemeProvider<S> {
    /// Mount over the theme the bootstrap already applied.
    ///
    /// The preference is read back from the store so an explicit choice is
    /// reported as such; anything else is `System`.
    pub fn mount(store: S, key: &str, resolved: ResolvedTheme) -> Self {
        let preference = match store.get(key) {
            Ok(Some(raw)) => match raw.parse::<ThemePreference>() {
                Ok(pref) if pref.explicit() == Some(resolved) => pref,
                _ => ThemePreference::System,
            },
            _ => ThemePreference::System,
        };
        Self { store, key: key.to_owned(), preference, resolved }
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    #[must_use]
    pub fn resolved(&self) -> ResolvedTheme {
        self.resolved
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    #[must_use]
    pub fn context(&self) -> ThemeContext {
        ThemeContext { preference: self.preference, resolved: self.resolved, storage_key: self.key.clone() }
    }

    /// Apply and persist an explicit change.
    ///
    /// `System` resolves through `signal` (light when unknown). A failed write
    /// is logged; the applied theme still changes for this page.
    pub fn set_preference(
        &mut self,
        preference: ThemePreference,
        signal: &dyn ColorSchemeSignal,
        root: &mut RootElement,
    ) -> ResolvedTheme {
        let resolved = preference
            .explicit()
            .unwrap_or_else(|| ResolvedTheme::from_dark(signal.prefers_dark().unwrap_or(false)));

        root.set_dark(resolved.is_dark());
        if let Err(e) = self.store.set(&self.key, preference.as_str()) {
            tracing::warn!(error = %e, %preference, "failed to persist theme preference");
        }

        self.preference = preference;
        self.resolved = resolved;
        resolved
    }

    /// Switch to the opposite of the current theme as an explicit choice.
    pub fn toggle(&mut self, root: &mut RootElement) -> ResolvedTheme {
        let next = self.resolved.toggled();
        self.set_preference(next.into(), &None::<bool>, root)
    }
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
