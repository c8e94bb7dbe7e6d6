//! Environment color-scheme signal.
//!
//! Browsers that support user-agent client hints report the OS-level scheme
//! in `Sec-CH-Prefers-Color-Scheme`, but only after the server lists it in
//! `Accept-CH`. Without the hint the server cannot tell, so the signal is
//! `None` and the inline head script settles it from `matchMedia`.

use axum::http::HeaderMap;
use axum::http::header::HeaderName;

pub const PREFERS_COLOR_SCHEME: HeaderName = HeaderName::from_static("sec-ch-prefers-color-scheme");

/// Source of the environment's reported color-scheme preference.
pub trait ColorSchemeSignal {
    /// `Some(true)` for dark, `Some(false)` for light, `None` when unknown.
    fn prefers_dark(&self) -> Option<bool>;
}

impl ColorSchemeSignal for bool {
    fn prefers_dark(&self) -> Option<bool> {
        Some(*self)
    }
}

impl ColorSchemeSignal for Option<bool> {
    fn prefers_dark(&self) -> Option<bool> {
        *self
    }
}

impl<T: ColorSchemeSignal + ?Sized> ColorSchemeSignal for &T {
    fn prefers_dark(&self) -> Option<bool> {
        (**self).prefers_dark()
    }
}

/// The `Sec-CH-Prefers-Color-Scheme` hint of one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientHint(Option<bool>);

impl ClientHint {
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let dark = headers
            .get(&PREFERS_COLOR_SCHEME)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_hint);
        Self(dark)
    }
}

impl ColorSchemeSignal for ClientHint {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Parse a structured-header token such as `"dark"` or `light`.
fn parse_hint(raw: &str) -> Option<bool> {
    let value = raw.trim().trim_matches('"');
    if value.eq_ignore_ascii_case("dark") {
        Some(true)
    } else if value.eq_ignore_ascii_case("light") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "signal_test.rs"]
mod tests;
