//! Pagination value objects
//!
//! `PageParams` normalizes untrusted `page` / `page_size` inputs and
//! `Page<T>` is the response envelope sent back to clients.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

/// Normalized pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    page: usize,
    page_size: usize,
    offset: usize,
}

impl PageParams {
    /// Parses raw query values. Never fails.
    ///
    /// - `page` falls back to 1 when absent, non-numeric or below 1.
    /// - `page_size` falls back to 20 under the same rule and is capped at 100.
    pub fn parse(raw_page: Option<&str>, raw_page_size: Option<&str>) -> Self {
        let page = parse_positive(raw_page).unwrap_or(DEFAULT_PAGE);
        let page_size = parse_positive(raw_page_size).unwrap_or(DEFAULT_PAGE_SIZE);
        Self::new(page, page_size)
    }

    /// Builds a window from already-numeric values, applying the same coercion as `parse`.
    pub fn new(page: usize, page_size: usize) -> Self {
        let page = if page == 0 { DEFAULT_PAGE } else { page };
        let page_size = match page_size {
            0 => DEFAULT_PAGE_SIZE,
            n => n.min(MAX_PAGE_SIZE),
        };

        Self {
            page,
            page_size,
            offset: (page - 1).saturating_mul(page_size),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the `[start, end)` bounds of this window clamped to `len` items.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = self.offset.min(len);
        let end = start.saturating_add(self.page_size).min(len);
        (start, end)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    let value = raw?.parse::<i64>().ok()?;
    if value < 1 {
        return None;
    }
    usize::try_from(value).ok()
}

/// Paginated response envelope.
///
/// An empty page serializes `data` as `[]`, matching the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, params: &PageParams, total_count: usize) -> Self {
        Self {
            data,
            page: params.page(),
            page_size: params.page_size(),
            total_count,
            total_pages: total_pages(total_count, params.page_size()),
        }
    }
}

/// `ceil(total_count / page_size)`, never less than 1.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}
