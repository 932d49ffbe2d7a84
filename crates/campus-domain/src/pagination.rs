//! Page-number pagination.

use serde::Serialize;

/// Page size of the student roster.
pub const STUDENTS_PER_PAGE: u64 = 10;

/// A requested page, before the total row count is known.
///
/// - `per_page`: ≥ 1
/// - `page`: ≥ 1, default 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub per_page: u64,
    pub page: u64,
}

impl PageRequest {
    /// Build a request from the raw `page` query parameter.
    ///
    /// Missing, non-numeric and zero values all fall back to page 1.
    pub fn from_query(per_page: u64, raw_page: Option<&str>) -> Self {
        let page = raw_page
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(1);
        Self {
            per_page: per_page.max(1),
            page: page.max(1),
        }
    }

    /// Clamp the requested page into `1..=num_pages` for `total` rows.
    pub fn resolve(self, total: u64) -> PageWindow {
        let num_pages = num_pages(total, self.per_page);
        PageWindow {
            number: self.page.clamp(1, num_pages),
            num_pages,
            per_page: self.per_page,
        }
    }
}

/// Number of pages needed for `total` rows. An empty result still has one (empty) page.
pub fn num_pages(total: u64, per_page: u64) -> u64 {
    if total == 0 {
        1
    } else {
        total.div_ceil(per_page.max(1))
    }
}

/// A resolved page position: always within `1..=num_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: u64,
    pub num_pages: u64,
    pub per_page: u64,
}

impl PageWindow {
    pub fn offset(&self) -> u64 {
        (self.number - 1) * self.per_page
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub num_pages: u64,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, window: PageWindow, total: u64) -> Self {
        Self {
            items,
            number: window.number,
            num_pages: window.num_pages,
            total,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }
}
