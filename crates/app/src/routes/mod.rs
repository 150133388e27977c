pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod sobre;

use dioxus::prelude::*;

use crate::components::header::Header;
use crate::guards::{evaluate, GuardDecision, GuardKind};
use crate::session::use_is_authenticated;

use dashboard::Dashboard;
use home::Home;
use login::Login;
use not_found::NotFound;
use register::Register;
use sobre::Sobre;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Home {})]
    #[layout(SiteLayout)]
        #[route("/home")]
        Home {},
        #[route("/sobre")]
        Sobre {},
        #[route("/register")]
        Register {},
        #[layout(GuestGuard)]
            #[route("/login")]
            Login {},
        #[end_layout]
        #[layout(AuthGuard)]
            #[route("/dashboard")]
            Dashboard {},
        #[end_layout]
        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

/// Applies a guard decision; on redirect the current entry is replaced so
/// the back button does not bounce through the guarded page.
fn guarded(kind: GuardKind, is_authenticated: bool) -> Element {
    match evaluate(kind, is_authenticated) {
        GuardDecision::Allow => rsx! { Outlet::<Route> {} },
        GuardDecision::Redirect(target) => {
            tracing::debug!(?kind, ?target, "route guard redirect");
            navigator().replace(target);
            rsx! {
                div { class: "guard-redirect",
                    p { "Redirecionando..." }
                }
            }
        }
    }
}

#[component]
fn AuthGuard() -> Element {
    let is_authenticated = use_is_authenticated();
    guarded(GuardKind::Authenticated, is_authenticated)
}

#[component]
fn GuestGuard() -> Element {
    let is_authenticated = use_is_authenticated();
    guarded(GuardKind::GuestOnly, is_authenticated)
}

/// Header plus the page outlet.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        Header {}
        main { class: "site-main",
            Outlet::<Route> {}
        }
        footer { class: "site-footer",
            p { "© Saúde Conecta. Todos os direitos reservados." }
        }
    }
}
