//! Authentication context and hooks for the UI.
//!
//! The session itself is owned by [`store::SessionStore`]; this module wraps
//! it in a reactive signal provided through context, so views re-render when
//! someone logs in, logs out, or the pipeline reports an expired session.

use dioxus::prelude::*;
use store::Session;

/// Reactive authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Session,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the auth signal.
/// Restores the persisted session when the app mounts, so a reload keeps the
/// user signed in.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(|| AuthState {
        session: crate::make_session_store().session(),
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Reset the reactive state after the request pipeline reported an expired
/// session. The durable store has already been cleared by the pipeline, so
/// this only syncs the signal; running it twice is harmless.
pub fn auth_expired(mut auth: Signal<AuthState>) {
    if auth.peek().is_authenticated() {
        tracing::warn!("session expired; dropping the cached auth state");
    }
    auth.set(AuthState::default());
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    let onclick = move |_| {
        crate::make_session_store().logout();
        auth.set(AuthState::default());
        // Back to the login entry point
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
