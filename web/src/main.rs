use api::ApiClient;
use dioxus::prelude::*;

use ui::{BackendProvider, Navbar, OnlineIndicator};
use views::{Home, Profiles};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/profiles")]
        Profiles {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One client per app, pointed at the backend chosen by the host rule.
    use_context_provider(ApiClient::from_host);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        BackendProvider {
            Router::<Route> {}
        }
    }
}

/// Top chrome shared by every screen.
#[component]
fn Shell() -> Element {
    rsx! {
        Navbar {
            div { class: "navbar-title",
                h1 { "Peer Learning Matcher" }
                p { class: "tagline", "Find study partners with complementary skills" }
            }
            nav { class: "navbar-links",
                Link { to: Route::Home {}, "Create Profile" }
                Link { to: Route::Profiles {}, "All Profiles" }
                OnlineIndicator {}
            }
        }
        Outlet::<Route> {}
    }
}
