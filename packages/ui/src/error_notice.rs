use dioxus::prelude::*;

/// Inline error banner with a Retry affordance.
///
/// Retry simply re-issues the same logical fetch; the pipelines never retry
/// on their own.
#[component]
pub fn ErrorNotice(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "error-notice",
            p { class: "error-message", "{message}" }
            button {
                class: "error-retry",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
