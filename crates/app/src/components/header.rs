use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdLockOpen, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_ui::components::{Button, ButtonVariant};

use crate::api::use_api;
use crate::auth_gateway::AuthGateway;
use crate::routes::Route;
use crate::session::{use_current_identity, use_session};

/// Site header. Navigation follows the session: guests get sign-in links,
/// signed-in users get the dashboard and a sign-out button.
#[component]
pub fn Header() -> Element {
    let api = use_api();
    let session = use_session();
    let identity = use_current_identity();
    let mut menu_open = use_signal(|| false);

    let handle_logout = move |_: MouseEvent| {
        let target = AuthGateway::new(api.clone(), session.clone()).logout();
        menu_open.set(false);
        navigator().push(target);
    };

    let user = identity.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./header.css") }
        header { class: "site-header",
            Link { to: Route::Home {}, class: "site-brand",
                span { class: "site-brand-mark", "+" }
                "Saúde Conecta"
            }

            button {
                class: "site-menu-toggle",
                r#type: "button",
                "aria-label": "Abrir menu",
                "aria-expanded": menu_open(),
                onclick: move |_| menu_open.toggle(),
                "\u{2630}"
            }

            nav { class: "site-nav", "data-open": menu_open(),
                Link { to: Route::Home {}, class: "site-nav-link", "Início" }
                Link { to: Route::Sobre {}, class: "site-nav-link", "Sobre" }

                if let Some(user) = user {
                    Link { to: Route::Dashboard {}, class: "site-nav-link",
                        Icon { width: 16, height: 16, icon: LdLayoutDashboard }
                        "Dashboard"
                    }
                    div { class: "site-user",
                        span { class: "site-user-avatar", title: "{user.email}", {user.initials()} }
                        span { class: "site-user-name", "{user.first_name}" }
                        span { class: "site-user-role", {user.role.display_name()} }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: handle_logout,
                        "Sair"
                    }
                } else {
                    Link { to: Route::Login {}, class: "site-nav-link",
                        Icon { width: 16, height: 16, icon: LdLockOpen }
                        "Entrar"
                    }
                    Link { to: Route::Register {}, class: "site-nav-link site-nav-cta",
                        Icon { width: 16, height: 16, icon: LdUserCheck }
                        "Cadastrar"
                    }
                }
            }
        }
    }
}
