use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionBackend;

/// In-memory SessionBackend for testing and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("credential"), None);

        backend.set("credential", "tok");
        assert_eq!(backend.get("credential").as_deref(), Some("tok"));

        backend.set("credential", "tok-2");
        assert_eq!(backend.get("credential").as_deref(), Some("tok-2"));

        backend.remove("credential");
        assert_eq!(backend.get("credential"), None);
    }

    #[test]
    fn clones_see_the_same_entries() {
        let backend = MemoryBackend::new();
        let other = backend.clone();

        backend.set("subject", "alice");
        assert_eq!(other.get("subject").as_deref(), Some("alice"));
    }
}
