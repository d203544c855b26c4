use dioxus::prelude::*;

use crate::Input;

/// A form that never performs a browser submission; `onsubmit` gets the event.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        form {
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Labelled input with its validation message underneath.
#[component]
pub fn FormField(
    label: String,
    name: String,
    value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] error: Option<String>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let invalid = error.is_some();
    rsx! {
        div { class: if invalid { "form-field form-field-invalid" } else { "form-field" },
            Input {
                label,
                name,
                value,
                placeholder,
                input_type,
                disabled,
                invalid,
                on_input: move |evt| on_input.call(evt),
            }
            if let Some(message) = error {
                div { class: "form-field-error", role: "alert", "{message}" }
            }
        }
    }
}

/// Row of buttons at the bottom of a form.
#[component]
pub fn FormActions(children: Element) -> Element {
    rsx! {
        div { class: "form-actions", {children} }
    }
}
