//! # Filesystem-backed session storage
//!
//! [`FileBackend`] persists the session entries as one file per key so the
//! session survives app restarts on desktop platforms.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── credential         # opaque signed token
//! ├── subject            # account name
//! └── role               # STUDENT or INSTRUCTOR
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base, e.g.
//! `~/.local/share/golfdiary/` on Linux or
//! `~/Library/Application Support/golfdiary/` on macOS.

use std::path::PathBuf;

use crate::session::SessionBackend;

/// Filesystem-backed SessionBackend for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileBackend {
    base: PathBuf,
}

impl FileBackend {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl SessionBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let path = self.entry_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::session::{SessionStore, CREDENTIAL_KEY};

    fn temp_base(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("golfdiary_test_{tag}_{}", std::process::id()))
    }

    #[test]
    fn session_survives_a_reopen() {
        let base = temp_base("reopen");
        let _ = std::fs::remove_dir_all(&base);

        let store = SessionStore::new(FileBackend::new(base.clone()));
        store.login("tok-file", "alice", Role::Student);

        // Re-open from the same directory, as a fresh process would.
        let store2 = SessionStore::new(FileBackend::new(base.clone()));
        let session = store2.session();
        assert_eq!(session.credential.as_deref(), Some("tok-file"));
        assert_eq!(session.subject.as_deref(), Some("alice"));
        assert_eq!(session.role, Some(Role::Student));

        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    fn logout_removes_the_entry_files() {
        let base = temp_base("logout");
        let _ = std::fs::remove_dir_all(&base);

        let backend = FileBackend::new(base.clone());
        let store = SessionStore::new(backend.clone());
        store.login("tok", "bob", Role::Instructor);
        store.logout();

        assert_eq!(backend.get(CREDENTIAL_KEY), None);
        assert!(!base.join(CREDENTIAL_KEY).exists());

        let store2 = SessionStore::new(backend);
        assert!(!store2.is_authenticated());

        let _ = std::fs::remove_dir_all(&base);
    }
}
