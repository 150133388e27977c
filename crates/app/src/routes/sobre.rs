use dioxus::prelude::*;
use shared_ui::components::{Card, CardDescription, CardHeader, CardTitle, PageHeader};

struct TeamMember {
    name: &'static str,
    role: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Elma Maria",
        role: "Desenvolvedor Frontend",
    },
    TeamMember {
        name: "Samara Angela",
        role: "UX Designer",
    },
    TeamMember {
        name: "Deide Costa",
        role: "Backend Developer",
    },
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

#[component]
pub fn Sobre() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./sobre.css") }
        div { class: "sobre-page",
            PageHeader {
                title: "Sobre nós",
                subtitle: "Tecnologia a serviço do cuidado".to_string(),
            }

            section { class: "sobre-mission",
                h2 { "Nossa missão" }
                p {
                    "Aproximar pacientes e profissionais de saúde, tornando o agendamento de "
                    "consultas e o acompanhamento do histórico médico simples, seguro e acessível."
                }
            }

            section { class: "sobre-team",
                h2 { "Nossa equipe" }
                div { class: "sobre-team-grid",
                    for member in TEAM.iter() {
                        Card { key: "{member.name}", class: "sobre-member",
                            CardHeader {
                                div { class: "sobre-avatar", {initials(member.name)} }
                                CardTitle { "{member.name}" }
                                CardDescription { "{member.role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
