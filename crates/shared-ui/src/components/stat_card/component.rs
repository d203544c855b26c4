use dioxus::prelude::*;

/// A single counter in a dashboard stats grid.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    /// Optional secondary line under the value.
    #[props(default)]
    hint: Option<String>,
) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-card-label", "{label}" }
            span { class: "stat-card-value", "{value}" }
            if let Some(hint) = hint {
                span { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}

/// Responsive grid wrapper for [`StatCard`]s.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
