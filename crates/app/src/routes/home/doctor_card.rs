use dioxus::prelude::*;
use shared_types::DoctorRecord;
use shared_ui::components::{
    Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle,
};

#[component]
pub fn DoctorCard(doctor: DoctorRecord, on_schedule: EventHandler<DoctorRecord>) -> Element {
    let (badge, availability) = if doctor.is_accepting_patients {
        (BadgeVariant::Success, "Aceitando pacientes")
    } else {
        (BadgeVariant::Warning, "Agenda fechada")
    };
    let name = format!("Dr. {}", doctor.full_name());
    let price = doctor.price_label();
    let selected = doctor.clone();

    rsx! {
        Card { class: "doctor-card",
            CardHeader {
                CardTitle { "{name}" }
                CardDescription { "CRM {doctor.crm}" }
            }
            CardContent {
                div { class: "doctor-specialties",
                    for specialty in doctor.specialties.iter() {
                        Badge { key: "{specialty}", variant: BadgeVariant::Info, "{specialty}" }
                    }
                }
                dl { class: "doctor-facts",
                    dt { "Consulta" }
                    dd { "{price}" }
                    dt { "Duração" }
                    dd { "{doctor.consultation_duration} min" }
                }
                Badge { variant: badge, "{availability}" }
            }
            CardFooter {
                Button {
                    disabled: !doctor.is_accepting_patients,
                    onclick: move |_| on_schedule.call(selected.clone()),
                    "Agendar"
                }
            }
        }
    }
}
