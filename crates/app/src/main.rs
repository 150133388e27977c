use dioxus::prelude::*;

mod api;
mod auth_gateway;
mod components;
mod config;
mod format_helpers;
mod guards;
mod routes;
mod session;
mod storage;

use api::ApiClient;
use routes::Route;
use session::SessionStore;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config::load_config);

    // Hydrated once; every page reads the same store.
    let session = use_context_provider(|| SessionStore::with_boxed(storage::default_storage()));
    let api_config = config.api.clone();
    use_context_provider(move || ApiClient::new(api_config, session.clone()));
    use_context_provider(move || config);

    rsx! {
        document::Title { "Saúde Conecta" }
        document::Link { rel: "stylesheet", href: THEME }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "guard-redirect",
                    p { "Carregando..." }
                }
            },
            Router::<Route> {}
        }
    }
}
