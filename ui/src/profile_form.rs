//! Profile creation form: required text fields plus tag checkbox groups.

use api::{ProfileDraft, TagSelection};
use dioxus::prelude::*;

/// Subjects offered as checkboxes for strengths and weaknesses.
pub const SUBJECT_OPTIONS: &[&str] = &[
    "Math",
    "Science",
    "English",
    "History",
    "Programming",
    "Art",
];

/// Study-preference options.
pub const PREFERENCE_OPTIONS: &[&str] = &[
    "Morning sessions",
    "Evening sessions",
    "Online",
    "In person",
    "Small groups",
    "One-on-one",
];

/// One tag category: a checkbox per fixed option plus a free-text "other"
/// field for comma-separated custom entries.
#[component]
pub fn TagGroup(
    legend: String,
    options: Vec<String>,
    mut selection: Signal<TagSelection>,
    #[props(default = false)] required: bool,
) -> Element {
    rsx! {
        fieldset { class: "tag-group",
            legend {
                "{legend}"
                if required {
                    span { class: "required", " *" }
                }
            }
            div { class: "tag-options",
                for option in options {
                    label { key: "{option}", class: "tag-option",
                        input {
                            r#type: "checkbox",
                            checked: selection().checked.iter().any(|c| c == &option),
                            onchange: {
                                let option = option.clone();
                                move |_| {
                                    let mut sel = selection.write();
                                    if let Some(pos) = sel.checked.iter().position(|c| *c == option) {
                                        sel.checked.remove(pos);
                                    } else {
                                        sel.checked.push(option.clone());
                                    }
                                }
                            },
                        }
                        span { "{option}" }
                    }
                }
            }
            input {
                r#type: "text",
                class: "tag-other",
                placeholder: "Other (comma separated)",
                value: selection().other,
                oninput: move |evt: FormEvent| selection.write().other = evt.value(),
            }
        }
    }
}

/// The create-profile form.
///
/// Collects the raw [`ProfileDraft`] and hands it to `on_submit`; validation
/// and the network workflow stay with the caller. Remount (via `key`) to
/// reset every field.
#[component]
pub fn ProfileForm(
    on_submit: EventHandler<ProfileDraft>,
    #[props(default = false)] submitting: bool,
) -> Element {
    let mut student_id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let strengths = use_signal(TagSelection::default);
    let weaknesses = use_signal(TagSelection::default);
    let preferences = use_signal(TagSelection::default);
    let mut description = use_signal(String::new);

    let subjects: Vec<String> = SUBJECT_OPTIONS.iter().map(|s| s.to_string()).collect();
    let preference_options: Vec<String> =
        PREFERENCE_OPTIONS.iter().map(|s| s.to_string()).collect();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(ProfileDraft {
            id: student_id(),
            name: name(),
            strengths: strengths(),
            weaknesses: weaknesses(),
            preferences: preferences(),
            description: description(),
        });
    };

    rsx! {
        form { class: "profile-form", onsubmit: handle_submit,

            div { class: "form-field",
                label { r#for: "student-id",
                    "Student ID"
                    span { class: "required", " *" }
                }
                input {
                    id: "student-id",
                    r#type: "text",
                    placeholder: "e.g. s42",
                    value: student_id(),
                    oninput: move |evt: FormEvent| student_id.set(evt.value()),
                }
            }

            div { class: "form-field",
                label { r#for: "student-name",
                    "Name"
                    span { class: "required", " *" }
                }
                input {
                    id: "student-name",
                    r#type: "text",
                    placeholder: "Your name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }

            TagGroup {
                legend: "Strengths (can help others with)",
                options: subjects.clone(),
                selection: strengths,
                required: true,
            }
            TagGroup {
                legend: "Weaknesses (need help with)",
                options: subjects,
                selection: weaknesses,
                required: true,
            }
            TagGroup {
                legend: "Study preferences",
                options: preference_options,
                selection: preferences,
            }

            div { class: "form-field",
                label { r#for: "description", "About you" }
                textarea {
                    id: "description",
                    rows: "3",
                    placeholder: "Anything else about how you learn",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }

            button {
                class: "primary",
                r#type: "submit",
                disabled: submitting,
                if submitting { "Submitting..." } else { "Find My Matches" }
            }
        }
    }
}
