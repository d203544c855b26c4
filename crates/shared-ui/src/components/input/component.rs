use dioxus::prelude::*;

/// A text input with an optional inline label.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] name: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] invalid: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", r#for: "{name}", "{label}" }
            }
            input {
                r#type: "{input_type}",
                id: "{name}",
                name: "{name}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": if invalid { "true" } else { "false" },
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}
