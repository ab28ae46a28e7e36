use dioxus::prelude::*;

/// Top navigation bar; screens drop their title block and links in as
/// children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            {children}
        }
    }
}
