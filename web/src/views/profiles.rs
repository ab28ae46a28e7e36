//! Directory of stored profiles, with removal.

use api::ApiClient;
use dioxus::prelude::*;

use ui::ErrorBanner;

#[component]
pub fn Profiles() -> Element {
    let client = use_context::<ApiClient>();
    let mut delete_error = use_signal(|| Option::<String>::None);

    let fetch = client.clone();
    let mut roster = use_resource(move || {
        let client = fetch.clone();
        async move { client.list_profiles().await.map_err(|e| e.to_string()) }
    });

    let handle_delete = use_callback(move |student_id: String| {
        let client = client.clone();
        spawn(async move {
            match client.delete_profile(&student_id).await {
                Ok(deleted) => {
                    tracing::info!("removed profile {}", deleted.student_id);
                    roster.restart();
                }
                Err(e) => {
                    tracing::error!("delete profile: {e}");
                    delete_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let body = match roster() {
        Some(Ok(list)) if list.profiles.is_empty() => rsx! {
            div { class: "empty-state",
                h3 { "No profiles yet" }
                p { "Create the first profile to get started." }
            }
        },
        Some(Ok(list)) => rsx! {
            p { class: "profiles-total", "{list.total} stored profiles" }
            div { class: "profiles-list",
                for profile in list.profiles {
                    div { key: "{profile.id}", class: "profile-row",
                        div { class: "profile-row-info",
                            h3 { "{profile.name}" }
                            p { class: "match-id", "ID: {profile.id}" }
                            p { class: "profile-tags", "Strengths: {profile.strengths}" }
                            p { class: "profile-tags", "Needs help with: {profile.weaknesses}" }
                        }
                        button {
                            class: "secondary",
                            onclick: {
                                let id = profile.id.clone();
                                move |_| handle_delete.call(id.clone())
                            },
                            "Remove"
                        }
                    }
                }
            }
        },
        Some(Err(message)) => rsx! {
            div { class: "error-message", "{message}" }
        },
        None => rsx! {
            p { class: "profiles-loading", "Loading profiles..." }
        },
    };

    rsx! {
        section { class: "profiles-section",
            h2 { "All Profiles" }

            if let Some(message) = delete_error() {
                ErrorBanner {
                    key: "{message}",
                    message: message.clone(),
                    on_dismiss: move |_| delete_error.set(None),
                }
            }

            {body}
        }
    }
}
