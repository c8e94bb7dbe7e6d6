use super::*;
use std::sync::Mutex;

/// Serializes tests that touch the shared config variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK`.
unsafe fn clear_config_env() {
    unsafe {
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("PORT");
        std::env::remove_var("THEME_STORAGE_KEY");
        std::env::remove_var("COOKIE_SECURE");
        std::env::remove_var("STATIC_DIR");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_config_env() };

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.storage_key, "theme");
    assert_eq!(cfg.port, 3000);
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_config_env();
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("PORT", "8080");
        std::env::set_var("THEME_STORAGE_KEY", "llens_theme");
        std::env::set_var("COOKIE_SECURE", "Yes");
        std::env::set_var("STATIC_DIR", "/srv/llens");
    }

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.bind_addr, IpAddr::from([127, 0, 0, 1]));
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.storage_key, "llens_theme");
    assert!(cfg.cookie_secure);
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/llens"));

    unsafe { clear_config_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_config_env();
        std::env::set_var("PORT", "eighty");
    }

    let err = AppConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"), "got {err}");

    unsafe { clear_config_env() };
}

#[test]
fn from_env_rejects_bad_storage_key() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_config_env();
        std::env::set_var("THEME_STORAGE_KEY", "theme;path=/");
    }

    assert!(matches!(AppConfig::from_env(), Err(ConfigError::StorageKey(_))));

    unsafe { clear_config_env() };
}

#[test]
fn from_env_rejects_bad_cookie_secure() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_config_env();
        std::env::set_var("COOKIE_SECURE", "maybe");
    }

    let err = AppConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("COOKIE_SECURE"));

    unsafe { clear_config_env() };
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "{raw:?}");
    }
    for raw in ["0", "false", "No", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "{raw:?}");
    }
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
}
