//! The root document element's class list.

use serde::Serialize;

/// Marker class global styles branch on.
pub const DARK_CLASS: &str = "dark";

/// `<html>` attributes the theme bootstrap is allowed to touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootElement {
    pub lang: String,
    classes: Vec<String>,
}

impl RootElement {
    #[must_use]
    pub fn new(lang: &str) -> Self {
        Self { lang: lang.to_owned(), classes: Vec::new() }
    }

    /// Root element with the layout's base transition classes.
    #[must_use]
    pub fn layout_default() -> Self {
        Self::new("en").with_classes(["transition-colors", "duration-300"])
    }

    #[must_use]
    pub fn with_classes<'a>(mut self, classes: impl IntoIterator<Item = &'a str>) -> Self {
        for class in classes {
            self.add_class(class);
        }
        self
    }

    /// Add a class if absent. Blank names are ignored.
    pub fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if class.is_empty() || self.has_class(class) {
            return;
        }
        self.classes.push(class.to_owned());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn set_dark(&mut self, dark: bool) {
        if dark {
            self.add_class(DARK_CLASS);
        } else {
            self.remove_class(DARK_CLASS);
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.has_class(DARK_CLASS)
    }

    /// Space-separated value for the `class` attribute.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

impl Default for RootElement {
    fn default() -> Self {
        Self::layout_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_default_has_transition_classes() {
        let root = RootElement::default();
        assert_eq!(root.lang, "en");
        assert_eq!(root.class_attr(), "transition-colors duration-300");
        assert!(!root.is_dark());
    }

    #[test]
    fn add_class_dedupes_and_ignores_blank() {
        let mut root = RootElement::new("en");
        root.add_class("a");
        root.add_class("a");
        root.add_class("  ");
        root.add_class("b");
        assert_eq!(root.classes(), ["a", "b"]);
    }

    #[test]
    fn set_dark_preserves_other_classes() {
        let mut root = RootElement::layout_default();
        root.set_dark(true);
        assert_eq!(root.class_attr(), "transition-colors duration-300 dark");
        root.set_dark(true);
        assert_eq!(root.classes().len(), 3);
        root.set_dark(false);
        assert_eq!(root.class_attr(), "transition-colors duration-300");
    }
}
