//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are rendered through the root layout with the theme resolved from
//! the request, so the first byte of `<html>` already carries the right
//! class. The theme API lets client code read and change the persisted
//! preference; static assets are served from the configured directory.

pub mod pages;
pub mod theme;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::index))
        .route("/api/theme", get(theme::get_theme).put(theme::put_theme))
        .route("/healthz", get(healthz))
        .nest_service("/static", static_dir)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
