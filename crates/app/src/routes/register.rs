use std::collections::HashMap;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_sdk_time::use_timeout;
use shared_types::{format_cpf, AppError, AppErrorKind, RegistrationForm, UserRole, BLOOD_TYPES};
use shared_ui::components::{
    Alert, AlertKind, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent,
    CardDescription, CardFooter, CardHeader, CardTitle, Form, FormSection, FormSelect, Input,
};

use crate::api::{use_api, RegistrationApi};
use crate::routes::Route;

const SUCCESS_MESSAGE: &str = "Conta criada com sucesso! Redirecionando para o login...";
const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Validate the form and submit it. Returns the message to show on success.
pub async fn submit_registration<R: RegistrationApi>(
    api: &R,
    form: &RegistrationForm,
) -> Result<String, AppError> {
    let request = form.to_request()?;
    let response = api.register(&request).await?;
    if response.success {
        tracing::info!(role = request.role.as_str(), "account created");
        Ok(SUCCESS_MESSAGE.to_string())
    } else {
        Err(AppError::bad_request(response.message.unwrap_or_default()))
    }
}

/// Account creation for patients and doctors.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let mut form = use_signal(|| RegistrationForm::for_role(UserRole::Patient));
    let mut specialty_draft = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut success_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let nav = navigator();
    let redirect_to_login = use_timeout(REDIRECT_DELAY, move |()| {
        nav.push(Route::Login {});
    });

    let handle_submit = move |_evt: FormEvent| {
        let api = api.clone();
        async move {
            loading.set(true);
            error_msg.set(None);
            success_msg.set(None);
            field_errors.set(HashMap::new());

            let snapshot = form.read().clone();
            match submit_registration(&api, &snapshot).await {
                Ok(message) => {
                    success_msg.set(Some(message));
                    form.set(RegistrationForm::for_role(snapshot.role));
                    redirect_to_login.action(());
                }
                Err(err) if err.kind == AppErrorKind::ValidationError => {
                    field_errors.set(err.field_errors);
                }
                Err(err) => {
                    tracing::warn!(kind = %err.kind, "registration failed");
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    let mut add_specialty = move || {
        let draft = specialty_draft();
        if form.write().add_specialty(&draft) {
            specialty_draft.set(String::new());
        }
    };

    let current = form.read().clone();
    let errors = field_errors.read().clone();
    let err = move |field: &str| errors.get(field).cloned();
    let is_doctor = current.role == UserRole::Doctor;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card auth-card-wide",
                CardHeader {
                    CardTitle { "Criar conta" }
                    CardDescription { "Cadastre-se como paciente ou médico" }
                }

                CardContent {
                    if let Some(message) = success_msg() {
                        Alert { kind: AlertKind::Success,
                            "{message} "
                            Link { to: Route::Login {}, "Ir para o login" }
                        }
                    }
                    if let Some(message) = error_msg() {
                        Alert { kind: AlertKind::Error, "{message}" }
                    }

                    div { class: "auth-role-toggle", role: "tablist",
                        for role in [UserRole::Patient, UserRole::Doctor] {
                            button {
                                key: "{role:?}",
                                r#type: "button",
                                class: "auth-role-option",
                                "aria-selected": current.role == role,
                                onclick: move |_| {
                                    form.write().role = role;
                                    field_errors.set(HashMap::new());
                                },
                                {role.display_name()}
                            }
                        }
                    }

                    Form { onsubmit: handle_submit,
                        FormSection { title: "Dados pessoais",
                            Input {
                                name: "first_name",
                                label: "Nome",
                                required: true,
                                value: current.first_name.clone(),
                                error: err("first_name"),
                                on_input: move |e: FormEvent| form.write().first_name = e.value(),
                            }
                            Input {
                                name: "last_name",
                                label: "Sobrenome",
                                required: true,
                                value: current.last_name.clone(),
                                error: err("last_name"),
                                on_input: move |e: FormEvent| form.write().last_name = e.value(),
                            }
                            Input {
                                name: "email",
                                label: "Email",
                                input_type: "email",
                                required: true,
                                value: current.email.clone(),
                                error: err("email"),
                                on_input: move |e: FormEvent| form.write().email = e.value(),
                            }
                            Input {
                                name: "phone",
                                label: "Telefone",
                                input_type: "tel",
                                placeholder: "(11) 99999-0000",
                                required: true,
                                value: current.phone.clone(),
                                error: err("phone"),
                                on_input: move |e: FormEvent| form.write().phone = e.value(),
                            }
                            Input {
                                name: "password",
                                label: "Senha",
                                input_type: "password",
                                required: true,
                                value: current.password.clone(),
                                error: err("password"),
                                on_input: move |e: FormEvent| form.write().password = e.value(),
                            }
                            Input {
                                name: "confirm_password",
                                label: "Confirmar senha",
                                input_type: "password",
                                required: true,
                                value: current.confirm_password.clone(),
                                error: err("confirm_password"),
                                on_input: move |e: FormEvent| form.write().confirm_password = e.value(),
                            }
                        }

                        if is_doctor {
                            FormSection { title: "Dados profissionais",
                                Input {
                                    name: "crm",
                                    label: "CRM",
                                    required: true,
                                    value: current.crm.clone(),
                                    error: err("crm"),
                                    on_input: move |e: FormEvent| form.write().crm = e.value(),
                                }
                                Input {
                                    name: "consultation_price",
                                    label: "Valor da consulta (R$)",
                                    input_type: "text",
                                    placeholder: "250,00",
                                    required: true,
                                    value: current.consultation_price.clone(),
                                    error: err("consultation_price"),
                                    on_input: move |e: FormEvent| form.write().consultation_price = e.value(),
                                }
                                Input {
                                    name: "consultation_duration",
                                    label: "Duração da consulta (min)",
                                    input_type: "number",
                                    required: true,
                                    value: current.consultation_duration.clone(),
                                    error: err("consultation_duration"),
                                    on_input: move |e: FormEvent| form.write().consultation_duration = e.value(),
                                }
                                div { class: "auth-specialties",
                                    div { class: "auth-specialty-entry",
                                        Input {
                                            name: "specialty",
                                            label: "Especialidades",
                                            placeholder: "Ex.: Cardiologia",
                                            value: specialty_draft(),
                                            error: err("specialties"),
                                            on_input: move |e: FormEvent| specialty_draft.set(e.value()),
                                        }
                                        Button {
                                            variant: ButtonVariant::Secondary,
                                            onclick: move |_| add_specialty(),
                                            "Adicionar"
                                        }
                                    }
                                    div { class: "auth-specialty-list",
                                        for (index, specialty) in current.specialties.iter().enumerate() {
                                            Badge {
                                                key: "{specialty}",
                                                variant: BadgeVariant::Info,
                                                "{specialty}"
                                                button {
                                                    r#type: "button",
                                                    class: "auth-specialty-remove",
                                                    "aria-label": "Remover {specialty}",
                                                    onclick: move |_| form.write().remove_specialty(index),
                                                    "\u{2715}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        } else {
                            FormSection { title: "Dados do paciente",
                                Input {
                                    name: "cpf",
                                    label: "CPF",
                                    placeholder: "000.000.000-00",
                                    required: true,
                                    value: current.cpf.clone(),
                                    error: err("cpf"),
                                    on_input: move |e: FormEvent| form.write().cpf = format_cpf(&e.value()),
                                }
                                Input {
                                    name: "date_of_birth",
                                    label: "Data de nascimento",
                                    input_type: "date",
                                    required: true,
                                    value: current.date_of_birth.clone(),
                                    error: err("date_of_birth"),
                                    on_input: move |e: FormEvent| form.write().date_of_birth = e.value(),
                                }
                                FormSelect {
                                    name: "blood_type",
                                    label: "Tipo sanguíneo",
                                    value: current.blood_type.clone(),
                                    error: err("blood_type"),
                                    onchange: move |e: Event<FormData>| form.write().blood_type = e.value(),
                                    option { value: "", "Selecione" }
                                    for blood in BLOOD_TYPES.iter() {
                                        option { key: "{blood}", value: "{blood}", "{blood}" }
                                    }
                                }
                            }
                        }

                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            loading_text: "Criando conta...",
                            "Criar conta"
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-switch",
                        "Já tem conta? "
                        Link { to: Route::Login {}, "Entrar" }
                    }
                }
            }
        }
    }
}
