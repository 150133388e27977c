use dioxus::prelude::*;

/// Labelled text input with an optional inline validation message.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: Option<EventHandler<FocusEvent>>,
    #[props(default)] name: String,
    #[props(default)] label: String,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field", "data-invalid": invalid,
            if !label.is_empty() {
                label { class: "field-label", r#for: "{name}",
                    "{label}"
                    if required {
                        span { class: "field-required", " *" }
                    }
                }
            }
            input {
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                required: required,
                disabled: disabled,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                onblur: move |evt| {
                    if let Some(handler) = &on_blur {
                        handler.call(evt);
                    }
                },
                ..merged,
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
