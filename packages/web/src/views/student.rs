//! Student dashboard: browse the public lesson catalogue and review your own
//! golf rounds.

use api::{ApiError, GolfRound, Lesson};
use dioxus::prelude::*;
use ui::{use_auth, ErrorNotice, LessonCard};

#[component]
pub fn StudentDashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut lessons = use_signal(Vec::<Lesson>::new);
    let mut rounds = use_signal(Vec::<GolfRound>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut retry = use_signal(|| 0u32);

    let handle_error = move |err: ApiError| {
        if err.is_auth_expired() {
            ui::auth_expired(auth);
            nav.replace(crate::Route::Login {});
        } else {
            error.set(Some(err.to_string()));
        }
    };

    let _loader = use_resource(move || async move {
        // Reading the counter re-runs this when Retry bumps it.
        let _attempt = retry();
        error.set(None);
        let client = ui::make_client();

        // Public catalogue first: reachable whether or not we are signed in.
        match client.lessons().await {
            Ok(list) => lessons.set(list),
            Err(err) => {
                let mut handle = handle_error;
                handle(err);
                return;
            }
        }

        // Own rounds only make sense with a session.
        if auth.peek().is_authenticated() {
            match client.golf_rounds().await {
                Ok(list) => rounds.set(list),
                Err(err) => {
                    let mut handle = handle_error;
                    handle(err);
                }
            }
        }
    });

    rsx! {
        section {
            class: "student-dashboard",

            if let Some(message) = error() {
                ErrorNotice {
                    message: message,
                    on_retry: move |_| retry += 1,
                }
            }

            h2 { "Lessons" }
            if lessons().is_empty() {
                p { class: "empty-state", "No lessons available yet." }
            }
            div {
                class: "lesson-list",
                for lesson in lessons() {
                    LessonCard { lesson: lesson }
                }
            }

            h2 { "My Golf Rounds" }
            if !auth().is_authenticated() {
                p { class: "empty-state", "Sign in to record your rounds." }
            } else if rounds().is_empty() {
                p { class: "empty-state", "No rounds recorded yet." }
            }
            ul {
                class: "round-list",
                for round in rounds() {
                    li {
                        class: "round-row",
                        span { "{round.course_name}" }
                        span { class: "round-score", "{round.total_score}" }
                    }
                }
            }
        }
    }
}
