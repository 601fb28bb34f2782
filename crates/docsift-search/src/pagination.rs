//! Fixed-size pagination.

/// Number of result rows shown per page unless configured otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Number of pages needed for `count` items, `0` when there are none.
#[must_use]
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// The items on page `current_page` (1-based).
///
/// Returns the half-open slice `[(p-1)*n, p*n)` clamped to `items`. Pages past
/// the end, page `0` and a page size of `0` yield an empty slice.
#[must_use]
pub fn paginate<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    if current_page == 0 || page_size == 0 {
        return &[];
    }
    let start = (current_page - 1).saturating_mul(page_size).min(items.len());
    let end = current_page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// Current page and page size.
///
/// Keeps `1 <= current_page <= max(total_pages, 1)` as long as the item count
/// passed to its methods is the one being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    items_per_page: usize,
}

impl PageState {
    /// Start on page 1. A page size of `0` is raised to `1`.
    #[must_use]
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    /// Current page (1-based).
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Page size.
    #[must_use]
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Number of pages for `count` items.
    #[must_use]
    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.items_per_page)
    }

    /// Highest valid page for `count` items.
    fn last_page(&self, count: usize) -> usize {
        self.total_pages(count).max(1)
    }

    /// Advance one page, stopping at the last page.
    pub fn next(&mut self, count: usize) -> usize {
        self.current_page = (self.current_page + 1).min(self.last_page(count));
        self.current_page
    }

    /// Go back one page, stopping at page 1.
    pub fn previous(&mut self) -> usize {
        self.current_page = self.current_page.saturating_sub(1).max(1);
        self.current_page
    }

    /// Jump to `page`, clamped into the valid range.
    pub fn go_to(&mut self, page: usize, count: usize) -> usize {
        self.current_page = page.clamp(1, self.last_page(count));
        self.current_page
    }

    /// Pull the current page back into range after the item count changed.
    pub fn clamp(&mut self, count: usize) -> usize {
        self.go_to(self.current_page, count)
    }

    /// Slice of `items` on the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.current_page, self.items_per_page)
    }

    /// Whether navigation controls are shown.
    ///
    /// With zero or one page they are hidden rather than disabled.
    #[must_use]
    pub fn controls_visible(&self, count: usize) -> bool {
        self.total_pages(count) > 1
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}
