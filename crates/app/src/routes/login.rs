use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{AppErrorKind, LoginRequest};
use shared_ui::components::{
    Alert, AlertKind, Button, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Form, Input,
};

use crate::api::use_api;
use crate::auth_gateway::AuthGateway;
use crate::routes::Route;
use crate::session::use_session;

/// Email/password sign-in. Guest-only; see `GuestGuard`.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |_evt: FormEvent| {
        let gateway = AuthGateway::new(api.clone(), session.clone());
        async move {
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let credentials = LoginRequest {
                email: email(),
                password: password(),
            };
            match gateway.login(credentials).await {
                Ok(_) => {
                    navigator().push(Route::Dashboard {});
                }
                Err(err) if err.kind == AppErrorKind::ValidationError => {
                    field_errors.set(err.field_errors);
                }
                Err(err) => {
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Entrar" }
                    CardDescription { "Acesse sua conta para ver seu painel de saúde" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        Alert { kind: AlertKind::Error, "{err}" }
                    }

                    Form { onsubmit: handle_login,
                        Input {
                            name: "email",
                            label: "Email",
                            input_type: "email",
                            placeholder: "seu@email.com",
                            required: true,
                            value: email(),
                            error: field_errors.read().get("email").cloned(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            name: "password",
                            label: "Senha",
                            input_type: "password",
                            required: true,
                            value: password(),
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            loading_text: "Entrando...",
                            "Entrar"
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-switch",
                        "Ainda não tem conta? "
                        Link { to: Route::Register {}, "Cadastre-se" }
                    }
                }
            }
        }
    }
}
