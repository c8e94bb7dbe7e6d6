//! Theme resolution and first-paint bootstrap.
//!
//! ARCHITECTURE
//! ============
//! The theme is resolved once per page load, before the body is painted, in
//! priority order: persisted choice, environment color-scheme signal, light.
//! The same algorithm runs in two places. The server applies it to the
//! `<html>` element of the response it is about to emit, and the inline head
//! script re-applies it against `localStorage` and `matchMedia` for clients
//! that did not send a color-scheme hint.
//!
//! The bootstrap reads through [`store::PreferenceStore`] and
//! [`signal::ColorSchemeSignal`] and writes only to [`root::RootElement`].

pub mod bootstrap;
pub mod preference;
pub mod root;
pub mod script;
pub mod signal;
pub mod store;

pub use bootstrap::{BootstrapState, ThemeBootstrap, bootstrap, resolve};
pub use preference::{ResolvedTheme, ThemePreference};
pub use root::{DARK_CLASS, RootElement};
pub use signal::{ClientHint, ColorSchemeSignal};
pub use store::{CookieStore, MemoryStore, PreferenceStore, StoreError};

/// Well-known key the preference is persisted under, both as a
/// `localStorage` entry and as a cookie name.
pub const DEFAULT_STORAGE_KEY: &str = "theme";
