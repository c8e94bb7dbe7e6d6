//! Root layout: the HTML shell every page is rendered into.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell declares metadata, loads the global fonts, injects the theme
//! bootstrap script, and wraps page content in the theme-provider mount.
//!
//! ORDERING
//! ========
//! The bootstrap script is the first script in `<head>`, so it runs before
//! `<body>` is parsed. The server also applies the resolved theme to the
//! `<html>` class it emits, which makes the first streamed byte correct for
//! clients that sent a color-scheme hint or have a theme cookie.

pub mod fonts;
pub mod metadata;

use minijinja::Environment;
use serde::Serialize;

use crate::provider::{ThemeContext, ThemeProvider};
use crate::theme::{ColorSchemeSignal, PreferenceStore, ResolvedTheme, RootElement, ThemeBootstrap, script};

pub use fonts::FontFamily;
pub use metadata::SiteMetadata;

const LAYOUT_TEMPLATE_NAME: &str = "layout.html";
const LAYOUT_TEMPLATE: &str = include_str!("../../templates/layout.html");
const BODY_BASE_CLASSES: &str = "antialiased bg-background text-foreground transition-all duration-300";

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout template: {0}")]
    Template(#[from] minijinja::Error),
    #[error("theme context encoding: {0}")]
    Context(#[from] serde_json::Error),
}

/// Values the layout template is rendered with.
#[derive(Debug, Serialize)]
struct LayoutContext<'a> {
    lang: &'a str,
    root_class: String,
    theme_script: &'a str,
    title: &'a str,
    description: &'a str,
    font_links: &'a [String],
    font_css: &'a str,
    body_class: &'a str,
    theme_context: String,
    content: &'a str,
}

/// A rendered document plus the theme it was rendered in.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub theme: ThemeContext,
}

pub struct RootLayout {
    env: Environment<'static>,
    metadata: SiteMetadata,
    storage_key: String,
    theme_script: String,
    font_links: Vec<String>,
    font_css: String,
    body_class: String,
}

impl RootLayout {
    /// Compile the layout template for the given metadata and fonts.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Template`] if the template fails to parse.
    pub fn new(metadata: SiteMetadata, fonts: &[FontFamily], storage_key: &str) -> Result<Self, LayoutError> {
        let mut env = Environment::new();
        env.add_template(LAYOUT_TEMPLATE_NAME, LAYOUT_TEMPLATE)?;

        let font_classes = fonts.iter().map(FontFamily::class_name).collect::<Vec<_>>();
        let body_class = if font_classes.is_empty() {
            BODY_BASE_CLASSES.to_owned()
        } else {
            format!("{} {BODY_BASE_CLASSES}", font_classes.join(" "))
        };

        Ok(Self {
            env,
            metadata,
            storage_key: storage_key.to_owned(),
            theme_script: script::theme_script(storage_key),
            font_links: fonts.iter().map(FontFamily::stylesheet_url).collect(),
            font_css: fonts.iter().map(FontFamily::css_rule).collect::<Vec<_>>().join("\n"),
            body_class,
        })
    }

    /// Layout with the site defaults: Llens metadata and the Geist families.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Template`] if the template fails to parse.
    pub fn with_defaults(storage_key: &str) -> Result<Self, LayoutError> {
        Self::new(SiteMetadata::default(), &[FontFamily::geist_sans(), FontFamily::geist_mono()], storage_key)
    }

    /// Render the document around `content` with an already-bootstrapped root.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the context cannot be encoded or rendered.
    pub fn render(&self, root: &RootElement, theme: &ThemeContext, content: &str) -> Result<String, LayoutError> {
        let ctx = LayoutContext {
            lang: &root.lang,
            root_class: root.class_attr(),
            theme_script: &self.theme_script,
            title: &self.metadata.title,
            description: &self.metadata.description,
            font_links: &self.font_links,
            font_css: &self.font_css,
            body_class: &self.body_class,
            theme_context: serde_json::to_string(theme)?,
            content,
        };
        Ok(self.env.get_template(LAYOUT_TEMPLATE_NAME)?.render(&ctx)?)
    }

    /// Bootstrap the theme for one request, mount the provider over it, and
    /// render `content` inside the shell.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if rendering fails.
    pub fn render_page(
        &self,
        store: &dyn PreferenceStore,
        signal: &dyn ColorSchemeSignal,
        content: &str,
    ) -> Result<RenderedPage, LayoutError> {
        let mut root = RootElement::layout_default();
        let mut boot = ThemeBootstrap::new(&self.storage_key);
        let resolved: ResolvedTheme = boot.run(store, signal, &mut root);

        let provider = ThemeProvider::mount(store, &self.storage_key, resolved);
        let theme = provider.context();
        let html = self.render(&root, &theme, content)?;

        tracing::debug!(theme = %resolved, preference = %theme.preference, "rendered root layout");
        Ok(RenderedPage { html, theme })
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
