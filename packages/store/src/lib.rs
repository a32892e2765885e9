pub mod models;

mod memory;
pub use memory::MemoryBackend;

mod file_store;
pub use file_store::FileBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageBackend;

mod session;
pub use models::{Role, Session};
pub use session::{SessionBackend, SessionStore, CREDENTIAL_KEY, ROLE_KEY, SUBJECT_KEY};
