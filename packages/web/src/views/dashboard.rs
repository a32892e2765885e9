//! Role-routed dashboard entry point.

use dioxus::prelude::*;
use ui::{use_auth, DashboardView, LogoutButton, SessionDiagnostics};

use super::{InstructorDashboard, StudentDashboard};

/// Mounts the dashboard matching the session's role, or bounces to login.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let Some(view) = ui::dashboard_for(&auth().session) else {
        nav.replace(crate::Route::Login {});
        return rsx! {};
    };

    rsx! {
        div {
            class: "dashboard-page",

            header {
                class: "dashboard-header",
                h1 { "GolfDiary" }
                LogoutButton { class: "logout-button" }
            }

            {match view {
                DashboardView::Instructor => rsx! { InstructorDashboard {} },
                DashboardView::Student => rsx! { StudentDashboard {} },
            }}

            footer {
                class: "dashboard-footer",
                SessionDiagnostics {}
            }
        }
    }
}
