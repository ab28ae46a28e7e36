//! Backend status indicator for the navbar.

use dioxus::prelude::*;

use crate::backend::use_backend;
use crate::icons::{FaCircleCheck, FaTriangleExclamation};
use crate::Icon;

/// A small icon that shows whether the backend answered the last probe.
///
/// - **Online**: green check ("Backend online")
/// - **Offline**: amber triangle ("Backend unreachable")
/// - Probe still running: nothing
#[component]
pub fn OnlineIndicator() -> Element {
    let status = use_backend();
    let state = status();

    if !state.checked {
        return rsx! {};
    }

    if state.online {
        rsx! {
            span {
                class: "online-indicator online-indicator--online",
                title: "Backend online",
                Icon { icon: FaCircleCheck, width: 14, height: 14 }
            }
        }
    } else {
        rsx! {
            span {
                class: "online-indicator online-indicator--offline",
                title: "Backend unreachable",
                Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
            }
        }
    }
}
