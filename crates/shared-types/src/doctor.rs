use serde::{Deserialize, Serialize};

use crate::common::PaginationMeta;

/// Account fields embedded in a doctor record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DoctorUser {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// A doctor listed in the public directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub user: DoctorUser,
    #[serde(default)]
    pub crm: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Minutes per consultation.
    #[serde(default)]
    pub consultation_duration: u32,
    #[serde(default)]
    pub consultation_price: f64,
    #[serde(default)]
    pub is_accepting_patients: bool,
}

impl DoctorRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.user.first_name, self.user.last_name)
            .trim()
            .to_string()
    }

    /// Case-insensitive substring match over the full name.
    pub fn name_matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        needle.is_empty() || self.full_name().to_lowercase().contains(&needle)
    }

    /// Price formatted the Brazilian way, e.g. `R$ 250,00`.
    pub fn price_label(&self) -> String {
        let cents = (self.consultation_price * 100.0).round() as i64;
        format!("R$ {},{:02}", cents / 100, (cents % 100).abs())
    }
}

/// Server-side filters for `GET /doctors`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DoctorQuery {
    pub specialty: Option<String>,
    pub is_accepting_patients: Option<bool>,
    pub page: i64,
    pub limit: i64,
    pub search: Option<String>,
}

impl DoctorQuery {
    /// Query-string pairs in wire order; absent filters are omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(specialty) = self.specialty.as_ref().filter(|s| !s.is_empty()) {
            pairs.push(("specialty", specialty.clone()));
        }
        if let Some(accepting) = self.is_accepting_patients {
            pairs.push(("isAcceptingPatients", accepting.to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        if let Some(search) = self.search.as_ref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.trim().to_string()));
        }
        pairs
    }
}

/// Body returned by the doctor directory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DoctorPage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub doctors: Vec<DoctorRecord>,
    #[serde(default)]
    pub total: i64,
    #[serde(default = "first_page")]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub total_pages: i64,
}

fn first_page() -> i64 {
    1
}

impl DoctorPage {
    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta::new(self.page, self.limit, self.total, self.total_pages)
    }
}
