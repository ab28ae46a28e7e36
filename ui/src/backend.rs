//! Backend connectivity context and hooks.

use api::ApiClient;
use dioxus::prelude::*;

/// Connectivity state for the matcher backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendStatus {
    /// Whether the startup probe has completed at least once.
    pub checked: bool,
    /// Whether the last probe reached the backend.
    pub online: bool,
    /// Profile count reported by the backend root, when reachable.
    pub total_profiles: Option<u32>,
}

impl Default for BackendStatus {
    fn default() -> Self {
        Self {
            checked: false,
            online: false,
            total_profiles: None,
        }
    }
}

/// Get the current backend connectivity state.
/// Returns a signal that updates whenever a probe completes.
pub fn use_backend() -> Signal<BackendStatus> {
    use_context::<Signal<BackendStatus>>()
}

/// Provider component that probes the backend root on startup and keeps the
/// connectivity state fresh. An unreachable backend never blocks the app.
#[component]
pub fn BackendProvider(children: Element) -> Element {
    let client = use_context::<ApiClient>();
    let mut status = use_signal(BackendStatus::default);

    // Startup liveness probe
    let probe = client.clone();
    let _ = use_resource(move || {
        let client = probe.clone();
        async move {
            match client.health().await {
                Ok(api_status) => {
                    status.set(BackendStatus {
                        checked: true,
                        online: true,
                        total_profiles: Some(api_status.total_profiles),
                    });
                }
                Err(e) => {
                    tracing::warn!("backend unreachable: {e}");
                    status.set(BackendStatus {
                        checked: true,
                        online: false,
                        total_profiles: None,
                    });
                }
            }
        }
    });

    // Periodic connectivity re-check (every 30s)
    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;

                // Don't race the startup probe
                if !status.peek().checked {
                    continue;
                }
                match client.health().await {
                    Ok(api_status) => {
                        let next = BackendStatus {
                            checked: true,
                            online: true,
                            total_profiles: Some(api_status.total_profiles),
                        };
                        if *status.peek() != next {
                            status.set(next);
                        }
                    }
                    Err(_) => {
                        if status.peek().online {
                            status.set(BackendStatus {
                                checked: true,
                                online: false,
                                total_profiles: None,
                            });
                        }
                    }
                }
            }
        });
    });

    use_context_provider(|| status);

    rsx! {
        {children}
    }
}

/// Non-blocking notice shown while the backend cannot be reached.
#[component]
pub fn BackendWarning() -> Element {
    let status = use_backend();
    let state = status();

    if !state.checked || state.online {
        return rsx! {};
    }

    rsx! {
        div {
            class: "banner banner-warning",
            "Backend API is not running. Please start the server first."
        }
    }
}
