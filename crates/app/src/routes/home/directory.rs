//! Client-side state of the doctor directory.
//!
//! Server filters and paging drive requests; the name search only narrows
//! the page already loaded.

use shared_types::{DirectoryConfig, DoctorPage, DoctorQuery, DoctorRecord, PaginationMeta};

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryState {
    pub specialty: Option<String>,
    pub accepting_only: bool,
    pub page: i64,
    pub limit: i64,
    pub search: String,
    pub data: Option<DoctorPage>,
    pub specialties: Vec<String>,
}

impl DirectoryState {
    pub fn new(config: &DirectoryConfig) -> Self {
        Self {
            specialty: config
                .default_specialty
                .clone()
                .filter(|s| !s.trim().is_empty()),
            accepting_only: config.accepting_only,
            page: 1,
            limit: config.page_size.max(1),
            search: String::new(),
            data: None,
            specialties: Vec::new(),
        }
    }

    /// The request for the current filters. The search term stays local.
    pub fn query(&self) -> DoctorQuery {
        DoctorQuery {
            specialty: self.specialty.clone(),
            is_accepting_patients: self.accepting_only.then_some(true),
            page: self.page,
            limit: self.limit,
            search: None,
        }
    }

    /// Empty string clears the filter.
    pub fn set_specialty(&mut self, specialty: &str) {
        let specialty = specialty.trim();
        self.specialty = (!specialty.is_empty()).then(|| specialty.to_string());
        self.page = 1;
    }

    pub fn set_accepting_only(&mut self, accepting_only: bool) {
        self.accepting_only = accepting_only;
        self.page = 1;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn total_pages(&self) -> i64 {
        self.meta().map(|m| m.total_pages).unwrap_or(1)
    }

    pub fn meta(&self) -> Option<PaginationMeta> {
        self.data.as_ref().map(DoctorPage::meta)
    }

    /// Move to `page`, clamped to the pages the server reported.
    /// Returns whether the page changed.
    pub fn go_to_page(&mut self, page: i64) -> bool {
        let target = page.clamp(1, self.total_pages().max(1));
        let changed = target != self.page;
        self.page = target;
        changed
    }

    /// Store a response. Specialties are collected from the first page that
    /// has doctors and kept from then on, so narrowing the filter does not
    /// shrink the options.
    pub fn apply_page(&mut self, page: DoctorPage) {
        if self.specialties.is_empty() && !page.doctors.is_empty() {
            let mut all: Vec<String> = page
                .doctors
                .iter()
                .flat_map(|d| d.specialties.iter())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            all.sort();
            all.dedup();
            self.specialties = all;
        }
        self.data = Some(page);
    }

    /// Doctors on the loaded page whose name matches the search term.
    pub fn visible(&self) -> Vec<DoctorRecord> {
        self.data
            .as_ref()
            .map(|page| {
                page.doctors
                    .iter()
                    .filter(|d| d.name_matches(&self.search))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
