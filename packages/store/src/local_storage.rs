//! Browser `localStorage` session backend (web builds only).
//!
//! This is the web platform's durable storage: entries survive page reloads
//! and are shared across tabs. Storage failures (private browsing, quota) are
//! swallowed like every other backend's — the user just starts logged out.

use crate::session::SessionBackend;

/// `localStorage`-backed SessionBackend for the web frontend.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
