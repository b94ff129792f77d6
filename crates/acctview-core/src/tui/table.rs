//! Paginated table state: page cursor and row selection within a page.

/// Rows split into fixed-size pages with one selected row.
#[derive(Debug, Clone)]
pub struct PagedTable<T> {
    items: Vec<T>,
    page_size: usize,
    /// Zero-based page index.
    page: usize,
    /// Selected row index within the current page.
    selected: usize,
}

impl<T> PagedTable<T> {
    /// Creates a table; `page_size` is clamped to at least 1.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            page: 0,
            selected: 0,
        }
    }

    /// All rows, across every page.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of pages; an empty table still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    /// Rows on the current page.
    pub fn page_items(&self) -> &[T] {
        let start = (self.page * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.page_items().get(self.selected)
    }

    /// Moves to page `page`, clamped to the last page. Resets selection.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let page = page.min(self.page_count() - 1);
        if page == self.page {
            return false;
        }
        self.page = page;
        self.selected = 0;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(0)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(usize::MAX)
    }

    /// Moves selection up; from the first row it continues at the bottom of
    /// the previous page.
    pub fn select_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else if self.prev_page() {
            self.selected = self.page_items().len().saturating_sub(1);
        }
    }

    /// Moves selection down; from the last row it continues at the top of
    /// the next page.
    pub fn select_down(&mut self) {
        let last = self.page_items().len().saturating_sub(1);
        if self.selected < last {
            self.selected += 1;
        } else {
            self.next_page();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize, page_size: usize) -> PagedTable<usize> {
        PagedTable::new((0..n).collect(), page_size)
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(table(24, 10).page_count(), 3);
        assert_eq!(table(20, 10).page_count(), 2);
        assert_eq!(table(0, 10).page_count(), 1);
        assert_eq!(table(3, 0).page_count(), 3);
    }

    #[test]
    fn page_items_slice_and_last_page_is_short() {
        let mut t = table(24, 10);
        assert_eq!(t.page_items(), &(0..10).collect::<Vec<_>>()[..]);
        assert!(t.last_page());
        assert_eq!(t.page(), 2);
        assert_eq!(t.page_items(), &[20, 21, 22, 23]);
        assert_eq!(t.items().len(), 24);
    }

    #[test]
    fn paging_is_clamped() {
        let mut t = table(24, 10);
        assert!(!t.prev_page());
        assert!(t.next_page());
        assert!(t.next_page());
        assert!(!t.next_page());
        assert_eq!(t.page(), 2);
        assert!(t.first_page());
        assert_eq!(t.page(), 0);
    }

    #[test]
    fn empty_table_has_no_selection() {
        let mut t = table(0, 10);
        t.select_down();
        t.select_up();
        assert!(t.page_items().is_empty());
        assert_eq!(t.selected_item(), None);
        assert!(!t.next_page());
    }

    #[test]
    fn selection_crosses_page_boundaries() {
        let mut t = table(24, 10);
        for _ in 0..9 {
            t.select_down();
        }
        assert_eq!(t.selected_item(), Some(&9));
        t.select_down();
        assert_eq!(t.page(), 1);
        assert_eq!(t.selected_item(), Some(&10));
        t.select_up();
        assert_eq!(t.page(), 0);
        assert_eq!(t.selected_item(), Some(&9));
    }

    #[test]
    fn changing_page_resets_selection() {
        let mut t = table(24, 10);
        t.select_down();
        t.select_down();
        t.next_page();
        assert_eq!(t.selected(), 0);
        assert_eq!(t.selected_item(), Some(&10));
    }
}
