//! Platform wiring: which durable storage and API client a frontend gets.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via
//!   [`store::LocalStorageBackend`]
//! - **Desktop / Mobile** (native): filesystem via [`store::FileBackend`]

use store::SessionStore;

/// Session store over the platform's durable storage: browser `localStorage`
/// on web, one file per entry under the platform data dir elsewhere.
pub fn make_session_store() -> SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorageBackend::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("golfdiary");
        SessionStore::new(store::FileBackend::new(base))
    }
}

/// API client bound to the platform session store.
pub fn make_client() -> api::ApiClient {
    api::ApiClient::from_env(make_session_store())
}
