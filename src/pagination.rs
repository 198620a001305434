//! In-memory pagination of collections fetched from the pantry API.
//!
//! The server always returns whole collections. [`Paginator`] keeps the last
//! fetched collection together with a 1-based page index and slices it for
//! rendering. [`Paginated`] is the serializable snapshot handed to templates,
//! JSON output and the command-line front end.

use serde::Serialize;
use thiserror::Error;

/// Number of items rendered per page unless configured otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Raised by [`Paginator::try_slice`] when a page does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },
}

/// Builds the list of page links shown around the current page.
///
/// `None` marks a gap between two runs of page numbers.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(last_page + 1);

    if mid_start > left_end && mid_start < mid_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Prev is offered only when the page before `current_page` exists.
fn previous_exists(current_page: usize, total_pages: usize) -> bool {
    current_page > 1 && current_page - 1 <= total_pages
}

/// One rendered page of a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            has_previous: previous_exists(current_page, total_pages),
            has_next: current_page < total_pages,
        }
    }
}

/// Holds a fetched collection and the page currently shown from it.
///
/// The page index is not validated against the collection. Callers reset it
/// with [`Paginator::reset`] whenever the collection is replaced after a
/// create or delete, so it never points past the end.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl<T> Paginator<T> {
    /// Creates an empty paginator. A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Replaces the held collection. The current page is left as is.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `ceil(len / page_size)`, zero for an empty collection.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Items of the 1-based `page`, clipped to the collection.
    ///
    /// Pages outside `1..=total_pages()` yield an empty slice.
    pub fn visible_slice(&self, page: usize) -> &[T] {
        if page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(self.page_size);
        if start >= self.items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Same as [`Paginator::visible_slice`] but rejects missing pages.
    pub fn try_slice(&self, page: usize) -> Result<&[T], PaginationError> {
        let total_pages = self.total_pages();
        if page == 0 || page > total_pages {
            return Err(PaginationError::PageOutOfRange { page, total_pages });
        }
        Ok(self.visible_slice(page))
    }

    pub fn current_slice(&self) -> &[T] {
        self.visible_slice(self.current_page)
    }

    /// Moves to `page` without any bounds check.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn reset(&mut self) {
        self.go_to(1);
    }

    pub fn has_previous(&self) -> bool {
        previous_exists(self.current_page, self.total_pages())
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Advances one page if a next page exists.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Steps back one page if a previous page exists.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        true
    }
}

impl<T: Clone> Paginator<T> {
    /// Snapshot of the current page for rendering.
    ///
    /// Page 0 is shown as page 1, with page 1's items.
    pub fn page_view(&self) -> Paginated<T> {
        let page = self.current_page.max(1);
        Paginated::new(self.visible_slice(page).to_vec(), page, self.total_pages())
    }
}
