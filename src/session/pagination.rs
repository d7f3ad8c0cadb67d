//! Result paging

use std::ops::Range;

/// One-based page position over a result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl Pagination {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items: 0,
        }
    }

    /// New result set: back to the first page
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    /// Move to `page`, clamped to the available pages
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Index range of the current page, always within the result set
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.items_per_page).min(self.total_items);
        let end = (start + self.items_per_page).min(self.total_items);
        start..end
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page_partial() {
        let mut pages = Pagination::new(5);
        pages.reset(12);
        assert_eq!(pages.total_pages(), 3);
        pages.go_to(3);
        assert_eq!(pages.range(), 10..12);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut pages = Pagination::new(5);
        pages.reset(12);
        pages.go_to(9);
        assert_eq!(pages.current_page(), 3);
        pages.go_to(0);
        assert_eq!(pages.current_page(), 1);
    }

    #[test]
    fn test_empty_results() {
        let mut pages = Pagination::new(5);
        pages.reset(0);
        pages.go_to(2);
        assert_eq!(pages.current_page(), 1);
        assert_eq!(pages.range(), 0..0);
        assert_eq!(pages.total_pages(), 0);
    }

    #[test]
    fn test_items_per_page_resets_page() {
        let mut pages = Pagination::new(5);
        pages.reset(12);
        pages.go_to(2);
        pages.set_items_per_page(10);
        assert_eq!(pages.current_page(), 1);
        assert_eq!(pages.range(), 0..10);
        assert_eq!(pages.items_per_page(), 10);
        assert_eq!(pages.total_items(), 12);
    }
}
