//! Full-screen loading overlay with a per-phase message.

use dioxus::prelude::*;

#[component]
pub fn LoadingOverlay(message: String) -> Element {
    rsx! {
        div { class: "loading-overlay",
            div { class: "loading-box",
                div { class: "spinner" }
                p { "{message}" }
            }
        }
    }
}
