//! Page-window computation shared by both list views.
//!
//! The pager is oblivious to what it slices. Resetting a view to its first
//! page is the caller's job (see `Session::recompute_derived`).

/// Default rows per list page.
pub const ITEMS_PER_PAGE: usize = 5;

/// Returns the `index`-th page (1-based) of `items`, clipped to bounds.
///
/// Out-of-range pages, a zero index, or a zero page size yield an empty slice.
pub fn page<T>(items: &[T], index: usize, size: usize) -> &[T] {
    if index == 0 || size == 0 {
        return &[];
    }
    let start = (index - 1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Number of pages for `len` items; never less than one so the controls can
/// always render.
pub fn page_count(len: usize, size: usize) -> usize {
    if size == 0 {
        return 1;
    }
    len.div_ceil(size).max(1)
}

/// Which list a page action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Earnings,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    index: usize,
    size: usize,
}

impl PageState {
    pub fn new(size: usize) -> Self {
        Self {
            index: 1,
            size: size.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn reset(&mut self) {
        self.index = 1;
    }

    /// Moves to `index`, clamped to `1..=count`.
    pub fn set(&mut self, index: usize, count: usize) {
        self.index = index.clamp(1, count.max(1));
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page(items, self.index, self.size)
    }

    pub fn info(&self, len: usize) -> PageInfo {
        PageInfo {
            index: self.index,
            count: page_count(len, self.size),
            total_items: len,
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(ITEMS_PER_PAGE)
    }
}

/// Page position reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub index: usize,
    pub count: usize,
    pub total_items: usize,
}
