//! Maps the current session onto the dashboard to mount.

use store::{Role, Session};

/// The two role-specific dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Student,
    Instructor,
}

/// Pick the dashboard for a session.
///
/// Unauthenticated sessions get no view at all; the caller is expected to
/// have redirected to login already. An authenticated session routes by role,
/// and anything other than a known instructor role falls back to the student
/// view — a deliberate policy for absent or unrecognized roles, not an error.
pub fn dashboard_for(session: &Session) -> Option<DashboardView> {
    if !session.is_authenticated() {
        return None;
    }
    match session.role {
        Some(Role::Instructor) => Some(DashboardView::Instructor),
        Some(Role::Student) | None => Some(DashboardView::Student),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(credential: Option<&str>, role: Option<Role>) -> Session {
        Session {
            credential: credential.map(str::to_string),
            subject: credential.map(|_| "someone".to_string()),
            role,
        }
    }

    #[test]
    fn unauthenticated_mounts_nothing() {
        assert_eq!(dashboard_for(&session(None, None)), None);
        assert_eq!(dashboard_for(&session(None, Some(Role::Instructor))), None);
    }

    #[test]
    fn instructor_routes_to_the_instructor_view() {
        assert_eq!(
            dashboard_for(&session(Some("tok"), Some(Role::Instructor))),
            Some(DashboardView::Instructor)
        );
    }

    #[test]
    fn student_routes_to_the_student_view() {
        assert_eq!(
            dashboard_for(&session(Some("tok"), Some(Role::Student))),
            Some(DashboardView::Student)
        );
    }

    #[test]
    fn missing_role_falls_back_to_the_student_view() {
        assert_eq!(
            dashboard_for(&session(Some("tok"), None)),
            Some(DashboardView::Student)
        );
    }
}
