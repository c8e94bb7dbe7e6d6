//! Theme preference API.
//!
//! Client code calls `PUT /api/theme` whenever the user changes theme so the
//! server can render the next page load in the chosen scheme.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::provider::{ThemeContext, ThemeProvider};
use crate::state::AppState;
use crate::theme::{self, ClientHint, CookieStore, RootElement, ThemePreference};

#[derive(Debug, Deserialize)]
pub struct ThemeUpdate {
    pub theme: ThemePreference,
}

/// `GET /api/theme` — preference and resolved theme for this request.
pub async fn get_theme(State(state): State<AppState>, headers: HeaderMap, jar: CookieJar) -> Json<ThemeContext> {
    let key = &state.config.storage_key;
    let store = CookieStore::new(jar, state.config.cookie_secure);
    let hint = ClientHint::from_headers(&headers);

    let resolved = theme::resolve(&store, key, &hint);
    Json(ThemeProvider::mount(&store, key, resolved).context())
}

/// `PUT /api/theme` — persist a new preference in the theme cookie.
///
/// `system` expires the cookie so later requests fall back to the hint.
pub async fn put_theme(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(update): Json<ThemeUpdate>,
) -> impl IntoResponse {
    let key = &state.config.storage_key;
    let store = CookieStore::new(jar, state.config.cookie_secure);
    let hint = ClientHint::from_headers(&headers);

    let mut root = RootElement::layout_default();
    let resolved = theme::bootstrap(&store, key, &hint, &mut root);
    let mut provider = ThemeProvider::mount(store, key, resolved);
    provider.set_preference(update.theme, &hint, &mut root);

    if update.theme == ThemePreference::System {
        if let Err(e) = provider.store().remove(key) {
            tracing::warn!(error = %e, "failed to clear theme cookie");
        }
    }

    tracing::info!(preference = %update.theme, resolved = %provider.resolved(), "theme preference updated");
    let context = provider.context();
    (provider.into_store().into_jar(), Json(context))
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
