//! Session data model shared by every frontend.

use serde::{Deserialize, Serialize};

/// Role assigned to an account by the backend.
///
/// The set is closed: anything the backend sends outside of it parses to
/// `None` and the caller decides what to do (the dashboard router falls back
/// to the student view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Instructor,
}

impl Role {
    /// Parse the persisted/wire form (`STUDENT` / `INSTRUCTOR`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "STUDENT" => Some(Role::Student),
            "INSTRUCTOR" => Some(Role::Instructor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Instructor => "INSTRUCTOR",
        }
    }
}

/// The client-held record of who is logged in.
///
/// `credential` is the opaque signed token issued by the backend at login; it
/// is never inspected for authorization decisions on this side of the wire.
/// After `login`/`logout` all three fields are present or all absent; a
/// restore from durable storage may legitimately be partial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub credential: Option<String>,
    pub subject: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    /// Whether the session counts as authenticated.
    ///
    /// Credential presence alone decides this; the server remains the sole
    /// authority on whether the credential is still good.
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}
