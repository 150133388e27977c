use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop.
///
/// Renders nothing while `open` is false. Clicking the backdrop or the close
/// button fires `on_close`; clicks inside the panel do not.
#[component]
pub fn Modal(
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{title}",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        "aria-label": "Fechar",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

/// Action row pinned to the bottom of a modal.
#[component]
pub fn ModalFooter(children: Element) -> Element {
    rsx! {
        footer { class: "modal-footer", {children} }
    }
}
