pub mod directory;
mod doctor_card;

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use dioxus_sdk_time::use_debounce;
use shared_types::{AppConfig, DoctorRecord};
use shared_ui::components::{
    Alert, AlertKind, Button, ButtonVariant, Card, CardContent, FormSelect, Input, Modal,
    ModalFooter, PageHeader, PageNav, SearchBar, Skeleton,
};

use crate::api::{use_api, DirectoryApi};
use directory::DirectoryState;
use doctor_card::DoctorCard;

const LOAD_ERROR: &str = "Não foi possível carregar a lista de médicos";
const RESPONSE_ERROR: &str = "Erro na resposta da API";

/// Public landing page with the doctor directory.
#[component]
pub fn Home() -> Element {
    let api = use_api();
    let config = use_context::<AppConfig>();
    let mut directory = use_signal(|| DirectoryState::new(&config.directory));
    let query = use_memo(move || directory.read().query());

    let doctors = use_resource(move || {
        let api = api.clone();
        let query = query();
        async move {
            match api.list_doctors(&query).await {
                Ok(page) if page.success => {
                    directory.write().apply_page(page);
                    Ok(())
                }
                Ok(_) => {
                    tracing::warn!(page = query.page, "directory responded without success");
                    Err(RESPONSE_ERROR.to_string())
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to load directory");
                    Err(LOAD_ERROR.to_string())
                }
            }
        }
    });

    let mut search_input = use_signal(String::new);
    let mut debounced_search = use_debounce(
        Duration::from_millis(config.directory.search_debounce_ms),
        move |term: String| directory.write().set_search(term),
    );

    let mut scheduling = use_signal(|| Option::<DoctorRecord>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let state = directory.read();
    let visible = state.visible();
    let page = state.page;
    let total_pages = state.total_pages();
    let specialty = state.specialty.clone().unwrap_or_default();
    let mut specialty_options = state.specialties.clone();
    if !specialty.is_empty() && !specialty_options.contains(&specialty) {
        specialty_options.insert(0, specialty.clone());
    }
    let accepting_only = state.accepting_only;
    let has_data = state.data.is_some();
    let searching = !state.search.trim().is_empty();
    drop(state);

    let modal_open = scheduling.read().is_some();
    let modal_doctor = scheduling
        .read()
        .as_ref()
        .map(|d| d.full_name())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }
        section { class: "home-hero",
            h1 { "Cuidar da sua saúde ficou mais simples" }
            p { "Encontre médicos, agende consultas e acompanhe seu histórico em um só lugar." }
        }

        PageHeader {
            title: "Nossos médicos",
            subtitle: "Profissionais disponíveis para atendimento".to_string(),
        }

        if let Some(message) = notice() {
            Alert {
                kind: AlertKind::Success,
                on_dismiss: move |_| notice.set(None),
                "{message}"
            }
        }

        SearchBar {
            div { class: "home-search",
                Icon { width: 16, height: 16, icon: LdSearch }
                Input {
                    name: "doctor-search",
                    label: "Buscar por nome",
                    placeholder: "Ex.: Carla Mendes",
                    value: search_input(),
                    on_input: move |evt: FormEvent| {
                        search_input.set(evt.value());
                        debounced_search.action(evt.value());
                    },
                }
            }
            FormSelect {
                name: "specialty",
                label: "Especialidade",
                value: specialty.clone(),
                onchange: move |evt: Event<FormData>| directory.write().set_specialty(&evt.value()),
                option { value: "", "Todas as especialidades" }
                for option_value in specialty_options {
                    option { key: "{option_value}", value: "{option_value}", "{option_value}" }
                }
            }
            label { class: "home-accepting",
                input {
                    r#type: "checkbox",
                    checked: accepting_only,
                    onchange: move |evt: FormEvent| directory.write().set_accepting_only(evt.checked()),
                }
                "Somente aceitando pacientes"
            }
        }

        match &*doctors.read() {
            Some(Err(message)) => rsx! {
                Card {
                    CardContent {
                        div { class: "home-error",
                            Alert { kind: AlertKind::Error, "{message}" }
                        }
                    }
                }
            },
            None if !has_data => rsx! {
                div { class: "doctor-grid",
                    for i in 0..6 {
                        Skeleton { key: "{i}", style: "height: 14rem; width: 100%;" }
                    }
                }
            },
            _ => rsx! {
                if visible.is_empty() {
                    p { class: "home-empty",
                        if searching {
                            "Nenhum médico encontrado para essa busca."
                        } else {
                            "Nenhum médico disponível no momento."
                        }
                    }
                } else {
                    div { class: "doctor-grid",
                        for doctor in visible {
                            DoctorCard {
                                key: "{doctor.id}",
                                doctor: doctor.clone(),
                                on_schedule: move |d: DoctorRecord| scheduling.set(Some(d)),
                            }
                        }
                    }
                }
                PageNav {
                    page,
                    total_pages,
                    on_change: move |target: i64| {
                        directory.write().go_to_page(target);
                    },
                }
            },
        }

        Modal {
            open: modal_open,
            title: "Agendar consulta",
            on_close: move |_| scheduling.set(None),
            p { "Deseja solicitar uma consulta com Dr. {modal_doctor}?" }
            ModalFooter {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| scheduling.set(None),
                    "Cancelar"
                }
                Button {
                    onclick: move |_| {
                        if let Some(doctor) = scheduling.take() {
                            tracing::info!(doctor_id = %doctor.id, "appointment requested");
                            notice.set(Some(format!("Agendamento com Dr. {}", doctor.full_name())));
                        }
                    },
                    "Confirmar"
                }
            }
        }
    }
}
