use super::*;
use boa_engine::{Context, Source};

const KEY: &str = "theme";
const DARK_MEDIA: &str = "function (q) { return { matches: q === '(prefers-color-scheme: dark)' }; }";
const LIGHT_MEDIA: &str = "function (q) { return { matches: false }; }";
const EMPTY_STORAGE: &str = "{ getItem: function (k) { return null; } }";
const THROWING_STORAGE: &str = "{ getItem: function (k) { throw new Error('storage disabled'); } }";

fn storage_with(value: &str) -> String {
    format!("{{ getItem: function (k) {{ return k === '{KEY}' ? '{value}' : null; }} }}")
}

/// Browser stand-in for one page load.
struct Env<'a> {
    cookie: &'a str,
    storage: String,
    /// `None` leaves `window.matchMedia` undefined.
    media: Option<&'a str>,
    initial_classes: &'a str,
}

impl Default for Env<'_> {
    fn default() -> Self {
        Self {
            cookie: "",
            storage: EMPTY_STORAGE.to_owned(),
            media: Some(LIGHT_MEDIA),
            initial_classes: "transition-colors duration-300",
        }
    }
}

impl Env<'_> {
    /// Run the head script `runs` times and return the root class list.
    fn run(&self, runs: usize) -> String {
        let media = self.media.map_or_else(String::new, |m| format!("window.matchMedia = {m};"));
        let mut src = format!(
            r"
            var classes = '{initial}'.split(' ').filter(function (c) {{ return c.length > 0; }});
            var document = {{
              cookie: '{cookie}',
              documentElement: {{
                classList: {{
                  add: function (c) {{ if (classes.indexOf(c) < 0) {{ classes.push(c); }} }},
                  remove: function (c) {{ var i = classes.indexOf(c); if (i >= 0) {{ classes.splice(i, 1); }} }}
                }}
              }}
            }};
            var window = {{ localStorage: {storage} }};
            {media}
            ",
            initial = self.initial_classes,
            cookie = self.cookie,
            storage = self.storage,
        );
        let script = theme_script(KEY);
        for _ in 0..runs {
            src.push_str(&script);
            src.push('\n');
        }
        src.push_str("classes.join(' ')");

        let mut ctx = Context::default();
        let value = ctx.eval(Source::from_bytes(&src)).expect("script should evaluate");
        value.to_string(&mut ctx).expect("class list is a string").to_std_string_escaped()
    }
}

fn is_dark(classes: &str) -> bool {
    classes.split(' ').any(|c| c == "dark")
}

// =============================================================================
// Resolution order
// =============================================================================

#[test]
fn stored_light_beats_dark_media() {
    let env = Env { storage: storage_with("light"), media: Some(DARK_MEDIA), ..Env::default() };
    assert_eq!(env.run(1), "transition-colors duration-300");
}

#[test]
fn stored_dark_beats_light_media() {
    let env = Env { storage: storage_with("dark"), ..Env::default() };
    assert!(is_dark(&env.run(1)));
}

#[test]
fn cookie_only_dark_is_dark() {
    let env = Env { cookie: "session=abc; theme=dark", ..Env::default() };
    assert_eq!(env.run(1), "transition-colors duration-300 dark");
}

#[test]
fn cookie_wins_over_local_storage() {
    let env = Env { cookie: "theme=light", storage: storage_with("dark"), ..Env::default() };
    assert!(!is_dark(&env.run(1)));
}

#[test]
fn invalid_cookie_falls_through_to_storage_then_media() {
    let env = Env { cookie: "theme=system; xtheme=dark", storage: storage_with("dark"), ..Env::default() };
    assert!(is_dark(&env.run(1)));

    let env = Env { cookie: "theme=", storage: storage_with("midnight"), media: Some(DARK_MEDIA), ..Env::default() };
    assert!(is_dark(&env.run(1)));
}

#[test]
fn throwing_storage_falls_back_to_media() {
    let env = Env { storage: THROWING_STORAGE.to_owned(), media: Some(DARK_MEDIA), ..Env::default() };
    assert!(is_dark(&env.run(1)));
}

#[test]
fn missing_media_query_defaults_to_light() {
    let env = Env { media: None, initial_classes: "dark transition-colors", ..Env::default() };
    assert_eq!(env.run(1), "transition-colors");
}

#[test]
fn running_twice_matches_running_once() {
    for env in [
        Env { media: Some(DARK_MEDIA), ..Env::default() },
        Env { cookie: "theme=light", media: Some(DARK_MEDIA), ..Env::default() },
        Env { storage: THROWING_STORAGE.to_owned(), ..Env::default() },
    ] {
        assert_eq!(env.run(1), env.run(2));
    }
}

#[test]
fn script_matches_server_resolution_for_persisted_cookie() {
    use crate::theme::{CookieStore, RootElement, bootstrap};
    use axum::http::{HeaderMap, HeaderValue, header};
    use axum_extra::extract::cookie::CookieJar;

    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
    let store = CookieStore::new(CookieJar::from_headers(&headers), false);
    let mut root = RootElement::layout_default();
    bootstrap(&store, KEY, &false, &mut root);

    let env = Env { cookie: "theme=dark", initial_classes: "transition-colors duration-300 dark", ..Env::default() };
    assert_eq!(env.run(1), root.class_attr());
}

// =============================================================================
// Escaping
// =============================================================================

#[test]
fn hostile_key_cannot_close_script_element() {
    let script = theme_script("</script><script>alert(1)//");
    assert!(!script.to_ascii_lowercase().contains("</script"));
    assert!(script.contains("\\u003c/script\\u003e"));
}

#[test]
fn script_never_touches_body() {
    assert!(!theme_script(KEY).contains("document.body"));
}

#[test]
fn js_string_literal_escapes_quotes_and_controls() {
    assert_eq!(js_string_literal("a\"b"), "\"a\\\"b\"");
    assert_eq!(js_string_literal("a\\b"), "\"a\\\\b\"");
    assert_eq!(js_string_literal("a\nb"), "\"a\\u000ab\"");
}
