use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastTone {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastTone {
    fn class(&self) -> &'static str {
        match self {
            ToastTone::Info => "info",
            ToastTone::Success => "success",
            ToastTone::Warning => "warning",
            ToastTone::Error => "error",
        }
    }
}

/// What the region needs to draw one notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastItem {
    pub id: u64,
    pub tone: ToastTone,
    pub message: String,
}

/// Fixed stack of notifications in the corner of the viewport, oldest first.
#[component]
pub fn ToastRegion(toasts: Vec<ToastItem>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div { class: "toast-region", role: "status", "aria-live": "polite",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "toast",
                    "data-tone": toast.tone.class(),
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        r#type: "button",
                        "aria-label": "Dismiss",
                        onclick: move |_| on_dismiss.call(toast.id),
                        Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
