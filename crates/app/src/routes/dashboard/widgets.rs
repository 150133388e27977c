use chrono::Utc;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdClock, LdFileText, LdPackage, LdShield};
use dioxus_free_icons::Icon;
use shared_types::PatientRecord;
use shared_ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
};

use super::model::{Activity, DashboardViewModel, InsuranceStatus};
use crate::format_helpers::{format_date_br, patient_age};

fn insurance_badge(status: InsuranceStatus) -> BadgeVariant {
    match status {
        InsuranceStatus::Active => BadgeVariant::Success,
        InsuranceStatus::Expired => BadgeVariant::Danger,
        InsuranceStatus::NotInformed => BadgeVariant::Neutral,
    }
}

#[component]
pub fn StatsGrid(view: DashboardViewModel) -> Element {
    rsx! {
        div { class: "dashboard-stats",
            StatCard { title: "Medicações Ativas", value: view.medication_count.to_string(),
                Icon { width: 20, height: 20, icon: LdPackage }
            }
            StatCard { title: "Condições Médicas", value: view.condition_count.to_string(),
                Icon { width: 20, height: 20, icon: LdFileText }
            }
            StatCard { title: "Alergias", value: view.allergy_count.to_string(),
                Icon { width: 20, height: 20, icon: LdBell }
            }
            Card { class: "stat-card",
                CardContent {
                    div { class: "stat-card-icon", Icon { width: 20, height: 20, icon: LdShield } }
                    p { class: "stat-card-title", "Status do Seguro" }
                    Badge { variant: insurance_badge(view.insurance), {view.insurance.label()} }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: String, value: String, children: Element) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardContent {
                div { class: "stat-card-icon", {children} }
                p { class: "stat-card-title", "{title}" }
                p { class: "stat-card-value", "{value}" }
            }
        }
    }
}

#[component]
pub fn ActivityFeed(activities: Vec<Activity>) -> Element {
    rsx! {
        Card { class: "dashboard-activity",
            CardHeader {
                CardTitle { "Atividades recentes" }
            }
            CardContent {
                if activities.is_empty() {
                    p { class: "dashboard-empty", "Nenhuma atividade registrada." }
                } else {
                    ul { class: "activity-list",
                        for (i, activity) in activities.iter().enumerate() {
                            li { key: "{i}", class: "activity-item",
                                Icon { width: 16, height: 16, icon: LdClock }
                                div {
                                    p { class: "activity-action", "{activity.action}" }
                                    p { class: "activity-time", "{activity.time}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProfileCard(patient: PatientRecord) -> Element {
    let age = patient_age(patient.date_of_birth.as_deref(), Utc::now().date_naive())
        .map(|years| format!("{years} anos"))
        .unwrap_or_else(|| "Não informada".to_string());
    let birth = format_date_br(patient.date_of_birth.as_deref());
    let blood = patient
        .blood_type
        .clone()
        .unwrap_or_else(|| "Não informado".to_string());
    let contact = patient.emergency_contact.clone().unwrap_or_default();
    let provider = patient
        .insurance_info
        .as_ref()
        .and_then(|i| i.provider.clone())
        .unwrap_or_else(|| "Não informado".to_string());

    rsx! {
        Card { class: "dashboard-profile",
            CardHeader {
                CardTitle { "Meu perfil" }
                CardDescription { "Dados cadastrais do paciente" }
            }
            CardContent {
                dl { class: "profile-list",
                    dt { "Data de nascimento" }
                    dd { "{birth}" }
                    dt { "Idade" }
                    dd { "{age}" }
                    dt { "Tipo sanguíneo" }
                    dd { "{blood}" }
                    dt { "Convênio" }
                    dd { "{provider}" }
                    if let Some(name) = &contact.name {
                        dt { "Contato de emergência" }
                        dd {
                            "{name}"
                            if let Some(phone) = &contact.phone {
                                " · {phone}"
                            }
                        }
                    }
                }
            }
        }
    }
}
