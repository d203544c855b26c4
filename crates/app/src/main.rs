use dioxus::prelude::*;

mod routes;
mod store;

use routes::Route;
use store::{use_store, AppStore, SharedStore};

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let built = use_hook(|| store::build_store().map_err(|e| e.friendly_message()));

    rsx! {
        shared_ui::UiStyles {}
        document::Link { rel: "stylesheet", href: APP_CSS }
        match built {
            Ok(shared) => rsx! { Shell { shared } },
            Err(message) => rsx! {
                div { class: "startup-error",
                    h1 { "The app could not start" }
                    p { "{message}" }
                }
            },
        }
    }
}

/// Provides the store to every route and keeps the UI in step with it.
#[component]
fn Shell(shared: SharedStore) -> Element {
    let app = use_context_provider(|| AppStore::new(shared.clone()));

    use_future(move || async move { app.forward_changes().await });
    use_future(move || async move { app.restore_session().await });

    rsx! {
        Router::<Route> {}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let app = use_store();
    let state = app.snapshot();
    let toasts = state.toasts.iter().map(store::toast_item).collect::<Vec<_>>();

    rsx! {
        shared_ui::ToastRegion {
            toasts,
            on_dismiss: move |id| app.dismiss_toast(id),
        }
    }
}
