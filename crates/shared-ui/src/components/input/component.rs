use dioxus::prelude::*;

use crate::Label;

/// Labelled text input with an optional leading icon.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] name: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] icon: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_icon = icon.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                Label { html_for: "{name}", "{label}" }
            }
            div { class: "input-field", "data-icon": has_icon,
                if let Some(icon) = icon {
                    span { class: "input-icon", {icon} }
                }
                input {
                    r#type: "{input_type}",
                    id: "{name}",
                    name: "{name}",
                    value: value,
                    placeholder: placeholder,
                    required: required,
                    disabled: disabled,
                    oninput: move |evt| on_input.call(evt),
                    ..merged,
                }
            }
        }
    }
}
