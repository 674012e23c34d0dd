//! Page arithmetic for listings and search results
//!
//! Pages are 1-based. A page past the end is valid and simply empty.

use serde::Serialize;

use crate::error::{RankError, Result};

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// # Errors
    ///
    /// [`RankError::InvalidArgument`] when `page` or `page_size` is zero.
    pub fn new(page: usize, page_size: usize) -> Result<Self> {
        if page == 0 {
            return Err(RankError::InvalidArgument("page numbers start at 1".to_string()));
        }
        if page_size == 0 {
            return Err(RankError::InvalidArgument("page size must be at least 1".to_string()));
        }
        Ok(Self { page, page_size })
    }

    /// Number of items before this page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// One page of results plus navigation metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<usize>,
}

impl<T> Page<T> {
    /// Wrap items that are already the requested page.
    #[must_use]
    pub fn new(items: Vec<T>, request: PageRequest, total: usize) -> Self {
        let total_pages = total.div_ceil(request.page_size);
        let has_next = request.page < total_pages;
        let has_prev = request.page > 1;
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total,
            total_pages,
            has_next,
            has_prev,
            next_page: request.page.checked_add(1).filter(|_| has_next),
            prev_page: has_prev.then_some(request.page - 1),
        }
    }

    /// Slice the requested page out of a complete result list.
    #[must_use]
    pub fn from_all(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len();
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(request.page_size)
            .collect();
        Self::new(items, request, total)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_prev: self.has_prev,
            next_page: self.next_page,
            prev_page: self.prev_page,
        }
    }
}
