//! Server-rendered pages.

use axum::extract::State;
use axum::http::header::{HeaderName, VARY};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::state::AppState;
use crate::theme::{ClientHint, CookieStore};

const ACCEPT_CH: HeaderName = HeaderName::from_static("accept-ch");
const CRITICAL_CH: HeaderName = HeaderName::from_static("critical-ch");
const COLOR_SCHEME_HINT: &str = "Sec-CH-Prefers-Color-Scheme";

/// Client-side app mount; the journal UI hydrates into it.
const JOURNAL_SHELL: &str = r#"<main id="app" class="min-h-screen"></main>"#;

/// `GET /` — journal shell rendered through the root layout.
///
/// `Critical-CH` makes supporting browsers retry once with the color-scheme
/// hint, so first visits without a cookie still render in the right theme.
pub async fn index(State(state): State<AppState>, headers: HeaderMap, jar: CookieJar) -> Response {
    let store = CookieStore::new(jar, state.config.cookie_secure);
    let hint = ClientHint::from_headers(&headers);

    match state.layout.render_page(&store, &hint, JOURNAL_SHELL) {
        Ok(page) => {
            let hint_headers = [
                (ACCEPT_CH, COLOR_SCHEME_HINT),
                (CRITICAL_CH, COLOR_SCHEME_HINT),
                (VARY, "Sec-CH-Prefers-Color-Scheme, Cookie"),
            ];
            (hint_headers, Html(page.html)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "root layout render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
