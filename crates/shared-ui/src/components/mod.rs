// Standalone components
pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod search_bar;
pub mod skeleton;

// Overlay and navigation
pub mod modal;
pub mod page_nav;

pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use modal::*;
pub use page_header::*;
pub use page_nav::*;
pub use search_bar::*;
pub use skeleton::*;

/// Render a root component to an HTML string.
#[cfg(test)]
pub(crate) fn render_html(root: fn() -> dioxus::prelude::Element) -> String {
    let mut dom = dioxus::prelude::VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
