//! This crate contains the shared UI for the GolfDiary frontends.

mod auth;
pub use auth::{auth_expired, use_auth, AuthProvider, AuthState, LogoutButton};

mod router;
pub use router::{dashboard_for, DashboardView};

mod platform;
pub use platform::{make_client, make_session_store};

mod lesson_card;
pub use lesson_card::LessonCard;

mod error_notice;
pub use error_notice::ErrorNotice;

mod session_diagnostics;
pub use session_diagnostics::SessionDiagnostics;
