//! Pagination slicer.

use serde::Serialize;

/// Page metadata attached to a paginated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Effective page index, 1-based, after clamping.
    pub page: usize,
    /// Total number of pages. At least 1, even for an empty sequence.
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_items: usize,
    /// Configured page size.
    pub page_size: usize,
}

/// Divides a filtered/sorted sequence into fixed-size pages.
///
/// Page indexes are 1-based. A requested page beyond the last valid page
/// clamps to the last page, so a stale index never references out-of-range
/// data.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: usize,
    requested: usize,
}

impl Paginator {
    /// A paginator starting at page 1. A page size of 0 is bumped to 1.
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 { 1 } else { page_size },
            requested: 1,
        }
    }

    /// The configured page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// The most recently requested page (before clamping).
    #[must_use]
    pub const fn requested_page(&self) -> usize {
        self.requested
    }

    /// Request a page. Zero is treated as page 1; clamping to the last
    /// valid page happens at slice time, when the sequence length is known.
    pub const fn set_page(&mut self, page: usize) {
        self.requested = if page == 0 { 1 } else { page };
    }

    /// Jump back to page 1. Called whenever a filter changes.
    pub const fn reset(&mut self) {
        self.requested = 1;
    }

    /// Total pages for a sequence of `len` items. Never 0.
    #[must_use]
    pub const fn total_pages(&self, len: usize) -> usize {
        let pages = len.div_ceil(self.page_size);
        if pages == 0 { 1 } else { pages }
    }

    /// The current page's subsequence plus page metadata.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> (&'a [T], PageInfo) {
        let total_pages = self.total_pages(items.len());
        let page = self.requested.min(total_pages);
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        let window = items.get(start..end).unwrap_or(&[]);
        (
            window,
            PageInfo {
                page,
                total_pages,
                total_items: items.len(),
                page_size: self.page_size,
            },
        )
    }
}
