use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
    Info,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Error => "error",
            AlertKind::Success => "success",
            AlertKind::Info => "info",
        }
    }

    /// Errors interrupt assistive tech; the rest are announced politely.
    pub fn role(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert",
            AlertKind::Success | AlertKind::Info => "status",
        }
    }
}

/// Banner for form outcomes and load failures.
#[component]
pub fn Alert(
    #[props(default)] kind: AlertKind,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "alert",
            "data-kind": kind.as_str(),
            role: kind.role(),
            div { class: "alert-body", {children} }
            if let Some(handler) = on_dismiss {
                button {
                    class: "alert-dismiss",
                    r#type: "button",
                    "aria-label": "Fechar",
                    onclick: move |_| handler.call(()),
                    "\u{2715}"
                }
            }
        }
    }
}
