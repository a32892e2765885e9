//! Instructor dashboard: manage your own lessons, draft new ones, edit
//! existing ones, and flip publication state.

use api::{ApiError, Lesson, LessonCategory, LessonDraft, LessonLevel};
use dioxus::prelude::*;
use ui::{use_auth, ErrorNotice, LessonCard};

#[component]
pub fn InstructorDashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut lessons = use_signal(Vec::<Lesson>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);

    // The one form serves both create and edit; `editing` holds the id of the
    // lesson being edited, if any.
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut category = use_signal(|| LessonCategory::Technique.as_str().to_string());
    let mut level = use_signal(|| LessonLevel::Beginner.as_str().to_string());
    let mut saving = use_signal(|| false);

    let handle_error = move |err: ApiError| {
        if err.is_auth_expired() {
            ui::auth_expired(auth);
            nav.replace(crate::Route::Login {});
        } else {
            error.set(Some(err.to_string()));
        }
    };

    let reset_form = move || {
        editing.set(None);
        title.set(String::new());
        description.set(String::new());
        category.set(LessonCategory::Technique.as_str().to_string());
        level.set(LessonLevel::Beginner.as_str().to_string());
    };

    let _loader = use_resource(move || async move {
        // Reading the counter re-runs this after every mutation and on Retry.
        let _attempt = reload();
        error.set(None);
        let client = ui::make_client();
        match client.instructor_lessons().await {
            Ok(list) => lessons.set(list),
            Err(err) => {
                let mut handle = handle_error;
                handle(err);
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let t = title().trim().to_string();
            if t.is_empty() {
                error.set(Some("Lesson title is required".to_string()));
                return;
            }

            let d = description().trim().to_string();
            let draft = LessonDraft {
                title: t,
                description: (!d.is_empty()).then_some(d),
                content: None,
                video_url: None,
                category: LessonCategory::parse(&category())
                    .unwrap_or(LessonCategory::Technique),
                level: LessonLevel::parse(&level()).unwrap_or(LessonLevel::Beginner),
            };

            saving.set(true);
            let client = ui::make_client();
            let result = match editing() {
                Some(id) => client.update_lesson(id, &draft).await.map(|_| ()),
                None => client.create_lesson(&draft).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    let mut reset = reset_form;
                    reset();
                    reload += 1;
                }
                Err(err) => {
                    let mut handle = handle_error;
                    handle(err);
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        section {
            class: "instructor-dashboard",

            if let Some(message) = error() {
                ErrorNotice {
                    message: message,
                    on_retry: move |_| reload += 1,
                }
            }

            h2 {
                if editing().is_some() { "Edit Lesson" } else { "New Lesson" }
            }
            form {
                class: "lesson-form",
                onsubmit: handle_submit,

                input {
                    r#type: "text",
                    placeholder: "Lesson title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }

                textarea {
                    placeholder: "Description (optional)",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }

                select {
                    value: category(),
                    oninput: move |evt: FormEvent| category.set(evt.value()),
                    {LessonCategory::ALL.iter().map(|c| {
                        let label = c.label();
                        rsx! { option { value: c.as_str(), "{label}" } }
                    })}
                }

                select {
                    value: level(),
                    oninput: move |evt: FormEvent| level.set(evt.value()),
                    {LessonLevel::ALL.iter().map(|l| {
                        let label = l.label();
                        rsx! { option { value: l.as_str(), "{label}" } }
                    })}
                }

                button {
                    r#type: "submit",
                    disabled: saving(),
                    if saving() {
                        "Saving..."
                    } else if editing().is_some() {
                        "Save changes"
                    } else {
                        "Create lesson"
                    }
                }
                if editing().is_some() {
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            let mut reset = reset_form;
                            reset();
                        },
                        "Cancel"
                    }
                }
            }

            h2 { "My Lessons" }
            if lessons().is_empty() {
                p { class: "empty-state", "You have not created any lessons yet." }
            }
            div {
                class: "lesson-list",
                {lessons().into_iter().map(|lesson| {
                    let id = lesson.id;
                    let published = lesson.published;
                    let edit_title = lesson.title.clone();
                    let edit_description = lesson.description.clone().unwrap_or_default();
                    let edit_category = lesson.category.as_str();
                    let edit_level = lesson.level.as_str();
                    rsx! {
                        LessonCard {
                            lesson: lesson,
                            if let Some(id) = id {
                                div {
                                    class: "lesson-actions",
                                    button {
                                        onclick: move |_| {
                                            editing.set(Some(id));
                                            title.set(edit_title.clone());
                                            description.set(edit_description.clone());
                                            category.set(edit_category.to_string());
                                            level.set(edit_level.to_string());
                                        },
                                        "Edit"
                                    }
                                    button {
                                        onclick: move |_| {
                                            spawn(async move {
                                                let client = ui::make_client();
                                                let result = if published {
                                                    client.unpublish_lesson(id).await
                                                } else {
                                                    client.publish_lesson(id).await
                                                };
                                                match result {
                                                    Ok(_) => reload += 1,
                                                    Err(err) => {
                                                        let mut handle = handle_error;
                                                        handle(err);
                                                    }
                                                }
                                            });
                                        },
                                        if published { "Unpublish" } else { "Publish" }
                                    }
                                    button {
                                        class: "danger",
                                        onclick: move |_| {
                                            spawn(async move {
                                                let client = ui::make_client();
                                                match client.delete_lesson(id).await {
                                                    Ok(()) => reload += 1,
                                                    Err(err) => {
                                                        let mut handle = handle_error;
                                                        handle(err);
                                                    }
                                                }
                                            });
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                })}
            }
        }
    }
}
