//! Fixed-size pagination of the displayed item list.

use std::ops::Range;

use crate::config::PAGE_SIZE;

/// Slices item lists into fixed-size pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    /// Create a paginator. A page size of zero falls back to [`PAGE_SIZE`].
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 { PAGE_SIZE } else { page_size },
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total_items / page_size)`; zero items means zero pages.
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }

    /// Clamp a requested 1-based page into the valid range.
    pub fn clamp(&self, requested: usize, total_items: usize) -> usize {
        let total_pages = self.total_pages(total_items);
        if total_items == 0 || requested == 0 {
            1
        } else {
            requested.min(total_pages)
        }
    }

    /// Compute the visible window for a requested page.
    pub fn window(&self, requested: usize, total_items: usize) -> PageWindow {
        let page = self.clamp(requested, total_items);
        let start = ((page - 1) * self.page_size).min(total_items);
        let end = (start + self.page_size).min(total_items);
        PageWindow {
            page,
            total_pages: self.total_pages(total_items),
            start,
            end,
            total_items,
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

/// One page of a listing, after clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// Current 1-based page
    pub page: usize,
    /// Number of pages (zero for an empty listing)
    pub total_pages: usize,
    /// First item index (inclusive)
    pub start: usize,
    /// Last item index (exclusive)
    pub end: usize,
    /// Length of the whole listing
    pub total_items: usize,
}

impl PageWindow {
    /// Item index range of this page.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow this page's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        &items[self.start.min(end)..end]
    }

    /// Page count for display: an empty listing still shows one page.
    pub fn display_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    /// 1-based number of the first item shown (0 when empty).
    pub fn first_item(&self) -> usize {
        if self.is_empty() { 0 } else { self.start + 1 }
    }

    /// 1-based number of the last item shown (0 when empty).
    pub fn last_item(&self) -> usize {
        self.end
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether prev/next controls are worth showing.
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }
}
