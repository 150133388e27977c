use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Danger => "danger",
        }
    }
}

/// Text shown while a button is busy, or the children otherwise.
pub fn busy_label(loading: bool, loading_text: &str) -> Option<&str> {
    if loading && !loading_text.is_empty() {
        Some(loading_text)
    } else {
        None
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default = false)]
    pub disabled: bool,
    /// Disables the button and swaps the label for `loading_text`.
    #[props(default = false)]
    pub loading: bool,
    #[props(default)]
    pub loading_text: String,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "btn", None, false),
        Attribute::new("data-variant", props.variant.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let busy = busy_label(props.loading, &props.loading_text).map(str::to_string);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "{props.button_type}",
            disabled: props.disabled || props.loading,
            "aria-busy": props.loading,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            if props.loading {
                span { class: "btn-spinner" }
            }
            if let Some(text) = busy {
                "{text}"
            } else {
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_label_only_when_loading_with_text() {
        assert_eq!(busy_label(true, "Entrando..."), Some("Entrando..."));
        assert_eq!(busy_label(true, ""), None);
        assert_eq!(busy_label(false, "Entrando..."), None);
    }

    #[test]
    fn default_variant_is_primary() {
        assert_eq!(ButtonVariant::default().as_str(), "primary");
    }

    #[test]
    fn loading_button_shows_spinner_and_busy_text() {
        fn saving() -> Element {
            rsx! {
                Button { loading: true, loading_text: "Salvando...", "Salvar" }
            }
        }
        let html = crate::components::render_html(saving);
        assert!(html.contains("btn-spinner"));
        assert!(html.contains("Salvando..."));
        assert!(!html.contains(">Salvar<"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn idle_button_renders_children_and_variant() {
        fn remove() -> Element {
            rsx! {
                Button { variant: ButtonVariant::Danger, button_type: "submit", "Remover" }
            }
        }
        let html = crate::components::render_html(remove);
        assert!(html.contains("Remover"));
        assert!(html.contains(r#"data-variant="danger""#));
        assert!(html.contains(r#"type="submit""#));
        assert!(!html.contains("btn-spinner"));
    }
}
