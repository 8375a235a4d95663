use pkg_constants::grid::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use std::ops::Range;
use tracing::warn;

/// Grid footer state: zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Switch page size and go back to the first page. Sizes outside
    /// [`PAGE_SIZE_OPTIONS`] are ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            warn!("Ignoring unsupported page size {}", size);
            return;
        }
        self.page_size = size;
        self.page = 0;
    }

    /// Number of pages for `total` rows; at least one.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.min(self.page_count(total) - 1);
    }

    pub fn next(&mut self, total: usize) {
        self.set_page(self.page + 1, total);
    }

    pub fn first(&mut self) {
        self.page = 0;
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Pull the page index back in range after the row count shrank.
    pub fn clamp(&mut self, total: usize) {
        self.set_page(self.page, total);
    }

    /// Index range of the rows on the current page.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// Footer label, e.g. `11–20 of 42`.
    pub fn label(&self, total: usize) -> String {
        let range = self.range(total);
        if range.is_empty() {
            return format!("0 of {}", total);
        }
        format!("{}–{} of {}", range.start + 1, range.end, total)
    }
}
