//! Create screen and the submit → create → match workflow.

use api::{ApiClient, MatchResponse, ProfileDraft, DEFAULT_TOP_K};
use dioxus::prelude::*;

use ui::{match_subtitle, BackendWarning, ErrorBanner, LoadingOverlay, MatchCard, ProfileForm};

/// Subtitle shown until the backend reports at least one match.
const DEFAULT_SUBTITLE: &str = "Based on complementary skills and study preferences";

/// Which screen the workflow is on. Lives in this view's scope; there is no
/// process-wide current-student state.
#[derive(Clone, Debug, PartialEq)]
enum Screen {
    Create,
    Matches(MatchResponse),
}

#[component]
pub fn Home() -> Element {
    let client = use_context::<ApiClient>();
    let mut screen = use_signal(|| Screen::Create);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| Option::<String>::None);
    // Bumped after a successful cycle; remounts the form with empty fields.
    let mut form_generation = use_signal(|| 0u32);

    let handle_submit = move |draft: ProfileDraft| {
        let client = client.clone();
        spawn(async move {
            // An in-flight submission wins over a repeated click.
            if loading.peek().is_some() {
                return;
            }
            error.set(None);

            let profile = match draft.into_profile() {
                Ok(profile) => profile,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(Some("Creating your profile...".to_string()));
            if let Err(e) = client.create_profile(&profile).await {
                tracing::error!("create profile: {e}");
                error.set(Some(e.to_string()));
                loading.set(None);
                return;
            }

            loading.set(Some("Finding your perfect matches...".to_string()));
            match client.matches(&profile.id, DEFAULT_TOP_K).await {
                Ok(resp) => {
                    screen.set(Screen::Matches(resp));
                    form_generation += 1;
                }
                Err(e) => {
                    tracing::error!("get matches: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(None);
        });
    };

    let body = match screen() {
        Screen::Create => rsx! {
            section { class: "create-section",
                h2 { "Create Your Profile" }
                BackendWarning {}
                if let Some(message) = error() {
                    ErrorBanner {
                        key: "{message}",
                        message: message.clone(),
                        on_dismiss: move |_| error.set(None),
                    }
                }
                ProfileForm {
                    key: "{form_generation}",
                    submitting: loading().is_some(),
                    on_submit: handle_submit,
                }
            }
        },
        Screen::Matches(data) => {
            let subtitle = if data.matches.is_empty() {
                DEFAULT_SUBTITLE.to_string()
            } else {
                match_subtitle(data.total_matches, &data.student_name)
            };
            rsx! {
                section { class: "matches-section",
                    h2 { "Your Matches" }
                    p { class: "match-subtitle", "{subtitle}" }

                    if data.matches.is_empty() {
                        div { class: "empty-state",
                            div { class: "empty-state-icon",
                                ui::Icon { icon: ui::icons::FaMagnifyingGlass, width: 28, height: 28 }
                            }
                            h3 { "No matches found yet" }
                            p { "Add more student profiles to find matches!" }
                        }
                    } else {
                        div { class: "matches-container",
                            for (index, result) in data.matches.iter().enumerate() {
                                MatchCard {
                                    key: "{result.student_id}",
                                    result: result.clone(),
                                    index,
                                }
                            }
                        }
                    }

                    button {
                        class: "secondary back-btn",
                        onclick: move |_| screen.set(Screen::Create),
                        "Create Another Profile"
                    }
                }
            }
        }
    };

    rsx! {
        if let Some(message) = loading() {
            LoadingOverlay { message }
        }
        {body}
    }
}
