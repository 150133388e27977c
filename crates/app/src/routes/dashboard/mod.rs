pub mod model;
mod widgets;

use chrono::Utc;
use dioxus::prelude::*;
use shared_ui::components::{
    Alert, AlertKind, Button, ButtonVariant, Card, CardContent, PageHeader, Skeleton,
};

use crate::api::use_api;
use crate::session::use_current_identity;
use model::{load_dashboard, DashboardData};
use widgets::{ActivityFeed, ProfileCard, StatsGrid};

/// Patient dashboard: summary cards, recent activity and profile details.
#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let identity = use_current_identity();

    let mut dashboard = use_resource(move || {
        let api = api.clone();
        let user = identity.read().clone();
        async move { load_dashboard(&api, user.as_ref(), Utc::now()).await }
    });
    let loading = matches!(*dashboard.state().read(), UseResourceState::Pending);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            match &*dashboard.read() {
                Some(Ok(data)) if !loading => rsx! {
                    DashboardBody { data: data.clone() }
                },
                Some(Err(err)) if !loading => rsx! {
                    PageHeader { title: "Meu painel" }
                    Card {
                        CardContent {
                            div { class: "dashboard-error",
                                Alert { kind: AlertKind::Error, "{err.message}" }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| dashboard.restart(),
                                    "Tentar novamente"
                                }
                            }
                        }
                    }
                },
                _ => rsx! { DashboardSkeleton {} },
            }
        }
    }
}

#[component]
fn DashboardBody(data: DashboardData) -> Element {
    let greeting = format!("Olá, {}", data.identity.first_name);

    rsx! {
        PageHeader {
            title: greeting,
            subtitle: "Acompanhe suas informações de saúde".to_string(),
        }
        StatsGrid { view: data.view.clone() }
        div { class: "dashboard-columns",
            ActivityFeed { activities: data.view.activities.clone() }
            ProfileCard { patient: data.patient.clone() }
        }
    }
}

#[component]
fn DashboardSkeleton() -> Element {
    rsx! {
        div { class: "dashboard-stats", "aria-busy": "true",
            for _ in 0..4 {
                Card {
                    CardContent {
                        Skeleton { style: "height: 3rem; width: 100%;" }
                    }
                }
            }
        }
        Card {
            CardContent {
                for _ in 0..4 {
                    Skeleton { style: "height: 2.5rem; width: 100%; margin-bottom: 0.5rem;" }
                }
            }
        }
    }
}
