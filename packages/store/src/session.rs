//! The session store: single source of truth for "who is logged in".
//!
//! Durable persistence is delegated to a [`SessionBackend`] holding three
//! independent string entries (credential, subject, role). Every mutating
//! operation fully overwrites those entries, so interleaved writers can only
//! race whole sessions against each other (last write wins), never halves of
//! one.

use std::sync::{Arc, RwLock};

use crate::models::{Role, Session};

/// Backend key for the opaque signed credential.
pub const CREDENTIAL_KEY: &str = "credential";
/// Backend key for the logged-in account name.
pub const SUBJECT_KEY: &str = "subject";
/// Backend key for the persisted role string.
pub const ROLE_KEY: &str = "role";

/// Durable key/value storage for the session entries.
///
/// Implementations swallow their own I/O failures: losing a persisted session
/// degrades to "logged out on next start", which every caller already handles.
pub trait SessionBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Owns the current [`Session`] and writes every change through to a backend.
///
/// Clones share the same in-memory state and backend, so a store handed to the
/// request pipeline and one held by the UI observe each other's mutations.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
    current: Arc<RwLock<Session>>,
}

impl SessionStore {
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        Self::with_backend(Arc::new(backend))
    }

    /// Restore whatever the backend holds. Partial data is kept as-is; a
    /// credential without subject/role still reports authenticated.
    pub fn with_backend(backend: Arc<dyn SessionBackend>) -> Self {
        let restored = Session {
            credential: backend.get(CREDENTIAL_KEY),
            subject: backend.get(SUBJECT_KEY),
            role: backend.get(ROLE_KEY).as_deref().and_then(Role::parse),
        };
        if restored.credential.is_some() && (restored.subject.is_none() || restored.role.is_none())
        {
            tracing::warn!("restored a partial session (credential without subject or role)");
        }
        Self {
            backend,
            current: Arc::new(RwLock::new(restored)),
        }
    }

    /// Replace the session unconditionally and persist all three entries.
    ///
    /// The credential is stored as received; its authenticity is the server's
    /// problem, not ours.
    pub fn login(
        &self,
        credential: impl Into<String>,
        subject: impl Into<String>,
        role: Role,
    ) {
        let credential = credential.into();
        let subject = subject.into();
        let mut current = self.current.write().unwrap();
        self.backend.set(CREDENTIAL_KEY, &credential);
        self.backend.set(SUBJECT_KEY, &subject);
        self.backend.set(ROLE_KEY, role.as_str());
        *current = Session {
            credential: Some(credential),
            subject: Some(subject),
            role: Some(role),
        };
    }

    /// Clear the session in memory and in the backend.
    ///
    /// Holding the write lock across both makes the pair atomic as observed
    /// through this store.
    pub fn logout(&self) {
        let mut current = self.current.write().unwrap();
        self.backend.remove(CREDENTIAL_KEY);
        self.backend.remove(SUBJECT_KEY);
        self.backend.remove(ROLE_KEY);
        *current = Session::default();
    }

    /// The 401 path: the server rejected the credential, so drop it.
    ///
    /// Identical to [`logout`](Self::logout) and idempotent — concurrent
    /// rejected calls may each invoke this.
    pub fn expire(&self) {
        if self.is_authenticated() {
            tracing::warn!("discarding session after the server rejected the credential");
        }
        self.logout();
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.current.read().unwrap().clone()
    }

    pub fn credential(&self) -> Option<String> {
        self.current.read().unwrap().credential.clone()
    }

    pub fn subject(&self) -> Option<String> {
        self.current.read().unwrap().subject.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.read().unwrap().role
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().unwrap().is_authenticated()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session())
            .finish()
    }
}
