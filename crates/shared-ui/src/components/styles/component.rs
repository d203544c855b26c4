use dioxus::prelude::*;

/// Stylesheet for every component in this crate. Mount once near the root.
#[component]
pub fn UiStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
    }
}
