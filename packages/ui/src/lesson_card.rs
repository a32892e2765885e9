use api::Lesson;
use dioxus::prelude::*;

/// One lesson in a dashboard list, with its published state badged.
/// `children` is the slot for per-dashboard actions (publish, delete, ...).
#[component]
pub fn LessonCard(lesson: Lesson, children: Element) -> Element {
    let badge = if lesson.published { "Published" } else { "Draft" };
    let badge_class = if lesson.published {
        "badge badge-published"
    } else {
        "badge badge-draft"
    };
    let meta = format!("{} / {}", lesson.category.label(), lesson.level.label());
    let description = lesson.description.clone().unwrap_or_default();
    let video_url = lesson.video_url.clone().unwrap_or_default();

    rsx! {
        div {
            class: "lesson-card",
            div {
                class: "lesson-card-header",
                h3 { "{lesson.title}" }
                span { class: "{badge_class}", "{badge}" }
            }
            p { class: "lesson-meta", "{meta}" }
            if !description.is_empty() {
                p { class: "lesson-description", "{description}" }
            }
            if !video_url.is_empty() {
                a {
                    class: "lesson-video-link",
                    href: "{video_url}",
                    target: "_blank",
                    "Watch video"
                }
            }
            {children}
        }
    }
}
