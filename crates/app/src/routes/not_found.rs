use dioxus::prelude::*;

use crate::routes::Route;

/// Unknown paths land on the home page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "unknown route; redirecting home");
    navigator().replace(Route::Home {});

    rsx! {
        div { class: "guard-redirect",
            p { "Página não encontrada. Redirecionando..." }
            Link { to: Route::Home {}, "Voltar ao início" }
        }
    }
}
