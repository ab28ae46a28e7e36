//! Transient error banner.

use dioxus::prelude::*;

/// How long a banner stays up before dismissing itself.
const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(5);

/// Inline error banner that dismisses itself after a fixed delay.
///
/// Key this on the message so a replaced error restarts the timer.
#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    use_effect(move || {
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(DISMISS_AFTER).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(DISMISS_AFTER).await;

            on_dismiss.call(());
        });
    });

    rsx! {
        div { class: "error-message", "{message}" }
    }
}
