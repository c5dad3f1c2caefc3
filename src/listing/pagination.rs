//! Page arithmetic for listing pages.

use std::ops::Range;

/// An entry of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

/// Current page position within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total: usize,
    per_page: usize,
    page: usize,
}

impl Paginator {
    /// Out-of-range pages are clamped into `1..=page_count`.
    pub fn new(total: usize, per_page: usize, requested: usize) -> Self {
        let per_page = per_page.max(1);
        let page_count = total.div_ceil(per_page).max(1);
        Self {
            total,
            per_page,
            page: requested.clamp(1, page_count),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of pages; an empty collection still has one.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    /// Index range of the current page's items.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    pub fn prev(&self) -> Option<usize> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.page < self.page_count()).then(|| self.page + 1)
    }

    /// First, last and the current page with its neighbours; a gap of one
    /// page is filled in instead of shown as an ellipsis.
    pub fn window(&self) -> Vec<PageItem> {
        let last = self.page_count();
        let mut pages: Vec<usize> = vec![1, last];
        for p in self.page.saturating_sub(1)..=self.page + 1 {
            if (1..=last).contains(&p) {
                pages.push(p);
            }
        }
        pages.sort_unstable();
        pages.dedup();

        let mut items = Vec::with_capacity(pages.len() + 2);
        let mut previous = 0;
        for page in pages {
            match page - previous {
                1 => {}
                2 => items.push(PageItem::Page(page - 1)),
                _ if previous > 0 => items.push(PageItem::Gap),
                _ => {}
            }
            items.push(PageItem::Page(page));
            previous = page;
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Gap, Page};

    #[test]
    fn test_empty_collection_has_one_page() {
        let p = Paginator::new(0, 10, 3);
        assert_eq!(p.page_count(), 1);
        assert_eq!(p.page(), 1);
        assert_eq!(p.range(), 0..0);
        assert_eq!(p.window(), vec![Page(1)]);
        assert_eq!(p.prev(), None);
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_clamps_requested_page() {
        assert_eq!(Paginator::new(25, 10, 99).page(), 3);
        assert_eq!(Paginator::new(25, 10, 0).page(), 1);
    }

    #[test]
    fn test_last_page_range() {
        let p = Paginator::new(25, 10, 3);
        assert_eq!(p.range(), 20..25);
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(p.slice(&items), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_window_middle() {
        let p = Paginator::new(100, 10, 5);
        assert_eq!(
            p.window(),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]
        );
        assert_eq!(p.prev(), Some(4));
        assert_eq!(p.next(), Some(6));
    }

    #[test]
    fn test_window_edges() {
        assert_eq!(
            Paginator::new(100, 10, 1).window(),
            vec![Page(1), Page(2), Gap, Page(10)]
        );
        assert_eq!(
            Paginator::new(100, 10, 10).window(),
            vec![Page(1), Gap, Page(9), Page(10)]
        );
    }

    #[test]
    fn test_window_fills_single_gap() {
        assert_eq!(
            Paginator::new(100, 10, 4).window(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(10)]
        );
    }

    #[test]
    fn test_window_small() {
        assert_eq!(
            Paginator::new(30, 10, 2).window(),
            vec![Page(1), Page(2), Page(3)]
        );
    }
}
