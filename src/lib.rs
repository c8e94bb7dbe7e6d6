//! # llens
//!
//! Root layout server for the Llens journaling app. Renders the HTML shell
//! every page lives in (metadata, global fonts, theme-provider mount) and
//! makes sure the first painted frame is already in the user's theme.

pub mod config;
pub mod layout;
pub mod provider;
pub mod routes;
pub mod state;
pub mod theme;
