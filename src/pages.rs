use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

/// A single page of a paged collection.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Number of the page
    pub page: u64,
    /// Number of the first item on the page
    pub cursor: u64,
    /// Number of items on the page
    pub items: u64,
}

/// Iterator over every page of a collection, created by [`PageCalc::pages`](crate::PageCalc::pages).
///
/// Yields one [`PageWindow`] per page, from the first page to the last one.
/// The sum of all `items` equals the total number of items.
#[derive(Debug, Clone)]
pub struct Pages {
    limit: u64,
    total: u64,
    next_page: u64,
    remaining: u64,
}

impl Pages {
    pub(crate) fn new(limit: u64, last_page: u64, total: u64) -> Self {
        Self {
            limit,
            total,
            next_page: 1,
            remaining: last_page,
        }
    }

    /// Check if all pages have been yielded.
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}

impl Iterator for Pages {
    type Item = PageWindow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }

        let page = self.next_page;
        self.next_page = self.next_page.saturating_add(1);
        self.remaining -= 1;

        let cursor = (page - 1) * self.limit + 1;
        let items = if self.remaining > 0 {
            self.limit
        } else {
            // the last page holds whatever is left, possibly nothing
            self.total - (cursor - 1).min(self.total)
        };

        Some(PageWindow {
            page,
            cursor,
            items,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for Pages {}

impl FusedIterator for Pages {}
