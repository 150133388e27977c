use serde::{Deserialize, Serialize};

/// Pagination metadata derived from a directory page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Build metadata, recomputing `total_pages` when the server left it out.
    pub fn new(page: i64, limit: i64, total: i64, total_pages: i64) -> Self {
        let total_pages = if total_pages > 0 {
            total_pages
        } else if limit > 0 {
            ((total + limit - 1) / limit).max(1)
        } else {
            1
        };
        let page = page.max(1);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}
