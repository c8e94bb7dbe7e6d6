//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup: per-request theme state lives in each request's
//! cookie store and root element.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::layout::{LayoutError, RootLayout};

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub layout: Arc<RootLayout>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the layout template fails to compile.
    pub fn new(config: AppConfig) -> Result<Self, LayoutError> {
        let layout = RootLayout::with_defaults(&config.storage_key)?;
        Ok(Self { config: Arc::new(config), layout: Arc::new(layout) })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// State built from default config, with no environment involved.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(AppConfig::default()).expect("default layout should compile")
    }
}
