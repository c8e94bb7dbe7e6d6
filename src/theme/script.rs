//! Inline `<head>` script that applies the theme before first paint.
//!
//! The script must stay synchronous and dependency-free: it runs during head
//! parsing, before `<body>` exists, so anything deferred to hydration would
//! paint one frame in the wrong scheme. Every storage and `matchMedia` access
//! is guarded so a throwing environment still leaves head processing intact.
//!
//! The theme cookie is read before `localStorage`: the server resolved the
//! emitted `<html>` class from that cookie, and the script must land on the
//! same answer or it would undo a persisted choice before first paint.

const THEME_SCRIPT_TEMPLATE: &str = include_str!("../../templates/theme_script.js");
const KEY_PLACEHOLDER: &str = "__STORAGE_KEY__";

/// Render the bootstrap script for preferences stored under `key`.
#[must_use]
pub fn theme_script(key: &str) -> String {
    THEME_SCRIPT_TEMPLATE.replace(KEY_PLACEHOLDER, &js_string_literal(key))
}

/// Quote `value` as a JS string literal that is also safe inside `<script>`.
fn js_string_literal(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '<' => quoted.push_str("\\u003c"),
            '>' => quoted.push_str("\\u003e"),
            '&' => quoted.push_str("\\u0026"),
            '\u{2028}' => quoted.push_str("\\u2028"),
            '\u{2029}' => quoted.push_str("\\u2029"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
