use dioxus::prelude::*;

/// Native `<select>` styled like the other fields.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] name: String,
    #[props(default)] label: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "select-field",
            if !label.is_empty() {
                label { class: "select-field-label", r#for: "{name}", "{label}" }
            }
            select {
                id: "{name}",
                name: "{name}",
                class: "select-field-control",
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            if let Some(message) = error {
                p { class: "select-field-error", "{message}" }
            }
        }
    }
}
