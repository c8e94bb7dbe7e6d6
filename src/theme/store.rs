//! Persisted preference stores.
//!
//! DESIGN
//! ======
//! The preference is read-many/write-rare state scoped to one browser client.
//! It is modelled as an injected key-value interface instead of a global so
//! the bootstrap only depends on `get`. On the server the client's store is
//! its cookie jar; [`MemoryStore`] backs tests and non-web callers.

use std::collections::HashMap;
use std::sync::Mutex;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// How long a persisted theme cookie lives.
const COOKIE_MAX_AGE_DAYS: i64 = 365;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
    #[error("preference key must not be empty")]
    InvalidKey,
}

/// Key-value string store holding the persisted theme preference.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

fn check_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() { Err(StoreError::InvalidKey) } else { Ok(()) }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries: Mutex::new(entries) }
    }

    /// Delete the entry under `key`. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the map lock is poisoned.
    pub fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(entries.remove(key).is_some())
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        check_key(key)?;
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        check_key(key)?;
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// COOKIE STORE
// =============================================================================

/// Request-scoped store over the client's cookies.
///
/// Reads see the cookies the browser sent. Writes queue `Set-Cookie` headers
/// on the jar returned by [`CookieStore::into_jar`].
#[derive(Debug)]
pub struct CookieStore {
    jar: Mutex<CookieJar>,
    secure: bool,
}

impl CookieStore {
    #[must_use]
    pub fn new(jar: CookieJar, secure: bool) -> Self {
        Self { jar: Mutex::new(jar), secure }
    }

    /// Expire the cookie under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] for an empty key or a poisoned jar lock.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        check_key(key)?;
        let cookie = Cookie::build((key.to_owned(), ""))
            .path("/")
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(Duration::ZERO);
        self.update(|jar| jar.add(cookie))
    }

    /// Consume the store, returning the jar to attach to the response.
    #[must_use]
    pub fn into_jar(self) -> CookieJar {
        match self.jar.into_inner() {
            Ok(jar) => jar,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn update(&self, f: impl FnOnce(CookieJar) -> CookieJar) -> Result<(), StoreError> {
        let mut jar = self
            .jar
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *jar = f(jar.clone());
        Ok(())
    }
}

impl PreferenceStore for CookieStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        check_key(key)?;
        let jar = self
            .jar
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(jar.get(key).map(|c| c.value().to_owned()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        check_key(key)?;
        // Not http-only: the inline head script reads the same preference
        // from localStorage, and client code mirrors it into this cookie.
        let cookie = Cookie::build((key.to_owned(), value.to_owned()))
            .path("/")
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(Duration::days(COOKIE_MAX_AGE_DAYS));
        self.update(|jar| jar.add(cookie))
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
