use dioxus::prelude::*;

/// Form wrapper that keeps the browser from navigating on submit.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(default = true)] novalidate: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            novalidate: novalidate,
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// Groups related fields under a legend.
#[component]
pub fn FormSection(title: String, children: Element) -> Element {
    rsx! {
        fieldset { class: "form-section",
            legend { class: "form-section-title", "{title}" }
            {children}
        }
    }
}
