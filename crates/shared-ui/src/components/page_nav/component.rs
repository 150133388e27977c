use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Page numbers to show around `current`, at most `width` of them.
///
/// The window slides so it never runs past either end.
pub fn page_window(current: i64, total_pages: i64, width: i64) -> Vec<i64> {
    if total_pages <= 0 || width <= 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let width = width.min(total_pages);
    let start = (current - width / 2).clamp(1, total_pages - width + 1);
    (start..start + width).collect()
}

/// Previous/next navigation with numbered pages in between.
#[component]
pub fn PageNav(
    page: i64,
    total_pages: i64,
    on_change: EventHandler<i64>,
    #[props(default = 5)] width: i64,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }
    let pages = page_window(page, total_pages, width);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "page-nav", "aria-label": "Paginação",
            Button {
                variant: ButtonVariant::Outline,
                disabled: page <= 1,
                onclick: move |_| on_change.call(page - 1),
                "Anterior"
            }
            for number in pages {
                button {
                    key: "{number}",
                    class: "page-nav-number",
                    r#type: "button",
                    "aria-current": if number == page { "page" } else { "false" },
                    onclick: move |_| on_change.call(number),
                    "{number}"
                }
            }
            span { class: "page-nav-info", "Página {page} de {total_pages}" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: page >= total_pages,
                onclick: move |_| on_change.call(page + 1),
                "Próxima"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn window_centres_on_current_page() {
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_sticks_to_edges() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn window_shrinks_to_page_count() {
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(page_window(42, 4, 3), vec![2, 3, 4]);
        assert_eq!(page_window(-1, 4, 3), vec![1, 2, 3]);
    }

    #[test]
    fn empty_when_nothing_to_page() {
        assert!(page_window(1, 0, 5).is_empty());
        assert!(page_window(1, 5, 0).is_empty());
    }

    #[test]
    fn single_page_renders_nothing() {
        fn single() -> Element {
            rsx! {
                PageNav { page: 1, total_pages: 1, on_change: move |_| {} }
            }
        }
        let html = crate::components::render_html(single);
        assert!(!html.contains("Anterior"));
        assert!(!html.contains("Próxima"));
        assert!(!html.contains("Página"));
    }

    #[test]
    fn several_pages_render_numbers_and_marks_current() {
        fn middle() -> Element {
            rsx! {
                PageNav { page: 2, total_pages: 3, on_change: move |_| {} }
            }
        }
        let html = crate::components::render_html(middle);
        assert!(html.contains("Página 2 de 3"));
        assert!(html.contains("Anterior"));
        assert!(html.contains("Próxima"));
        assert_eq!(html.matches("page-nav-number").count(), 3);
        assert_eq!(html.matches(r#"aria-current="page""#).count(), 1);
    }
}
