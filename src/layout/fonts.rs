//! Global font families exposed as CSS custom properties.

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily {
    /// Family name as published on Google Fonts.
    pub family: &'static str,
    /// Custom property the family is bound to, e.g. `--font-geist-sans`.
    pub css_variable: &'static str,
    /// Generic fallback stack appended after the family.
    pub fallback: &'static str,
    pub subset: &'static str,
}

impl FontFamily {
    #[must_use]
    pub fn geist_sans() -> Self {
        Self {
            family: "Geist",
            css_variable: "--font-geist-sans",
            fallback: "ui-sans-serif, system-ui, sans-serif",
            subset: "latin",
        }
    }

    #[must_use]
    pub fn geist_mono() -> Self {
        Self {
            family: "Geist Mono",
            css_variable: "--font-geist-mono",
            fallback: "ui-monospace, SFMono-Regular, monospace",
            subset: "latin",
        }
    }

    /// Body class that defines this family's custom property.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.css_variable.trim_start_matches('-').to_owned()
    }

    #[must_use]
    pub fn stylesheet_url(&self) -> String {
        format!(
            "{GOOGLE_FONTS_CSS}?family={}:wght@100..900&subset={}&display=swap",
            self.family.replace(' ', "+"),
            self.subset
        )
    }

    /// Rule binding the custom property under [`Self::class_name`].
    #[must_use]
    pub fn css_rule(&self) -> String {
        format!(".{} {{ {}: \"{}\", {}; }}", self.class_name(), self.css_variable, self.family, self.fallback)
    }
}
