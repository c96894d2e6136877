use crate::config::{CursorPolicy, LimitPolicy, PageCalcConfig};
use crate::error::PageCalcError;
use crate::pages::Pages;
use crate::position::Position;
use crate::PageCalcResult;

/// Calculates page numbers and cursors of paged results.
///
/// The cursor is the number of the first item on the current page, both cursor and page
/// start at 1. Every mutation keeps the two in sync, so that
/// `cursor == (page - 1) * limit + 1` holds at all times.
///
/// Values that do not exist, like the page before the first one, are returned as `None`.
///
/// ## Example
///
/// ```
/// use page_calc::PageCalc;
///
/// let mut calc = PageCalc::new(20).unwrap();
/// calc.move_cursor(41, None).unwrap();
/// assert_eq!(calc.page(), 3);
/// assert_eq!(calc.next_cursor(100), Some(61));
/// assert_eq!(calc.previous_cursor(), Some(21));
/// assert_eq!(calc.last_cursor(100), 81);
/// assert_eq!(calc.total_pages(100), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCalc {
    /// Number of items on one page
    limit: u64,
    /// Number of the first item on the current page
    cursor: u64,
    /// Number of the current page
    page: u64,
    limit_policy: LimitPolicy,
    cursor_policy: CursorPolicy,
}

impl TryFrom<PageCalcConfig> for PageCalc {
    type Error = PageCalcError;

    fn try_from(config: PageCalcConfig) -> Result<Self, Self::Error> {
        let limit = config.limit_policy.apply(config.limit)?;

        Ok(PageCalc {
            limit,
            cursor: 1,
            page: 1,
            limit_policy: config.limit_policy,
            cursor_policy: config.cursor_policy,
        })
    }
}

impl PageCalc {
    /// Creates a calculator on the first page, using the strict default policies.
    ///
    /// Fails with [`PageCalcError::InvalidLimit`] if `limit` is zero.
    pub fn new(limit: u64) -> PageCalcResult<Self> {
        Self::from_config(PageCalcConfig::builder().limit(limit).build())
    }

    /// Creates a calculator on the first page from a configuration.
    pub fn from_config(config: PageCalcConfig) -> PageCalcResult<Self> {
        Self::try_from(config)
    }

    /// Sets the current cursor and updates the current page.
    ///
    /// A cursor of zero is treated as 1. If `limit` is given, it replaces the stored limit
    /// before the cursor is checked. If the cursor does not start a page, the configured
    /// [`CursorPolicy`] either rejects it or snaps it to the start of its page.
    ///
    /// Nothing is changed if an error is returned.
    pub fn move_cursor(&mut self, cursor: u64, limit: Option<u64>) -> PageCalcResult<()> {
        let limit = self.resolve_limit(limit)?;

        let cursor = match self.cursor_policy.apply(cursor.max(1), limit) {
            Ok(cursor) => cursor,
            Err(err) => {
                tracing::debug!(cursor, limit, "Rejecting cursor");
                return Err(err);
            }
        };

        self.limit = limit;
        self.cursor = cursor;
        self.page = (cursor - 1) / limit + 1;
        tracing::debug!(cursor = self.cursor, page = self.page, limit, "Moved cursor");
        Ok(())
    }

    /// Sets the current page and updates the current cursor.
    ///
    /// A page of zero is treated as 1. If `limit` is given, it replaces the stored limit.
    ///
    /// Nothing is changed if an error is returned.
    pub fn goto_page(&mut self, page: u64, limit: Option<u64>) -> PageCalcResult<()> {
        let limit = self.resolve_limit(limit)?;
        let page = page.max(1);

        let cursor = (page - 1)
            .checked_mul(limit)
            .and_then(|offset| offset.checked_add(1))
            .ok_or_else(|| {
                tracing::debug!(page, limit, "Rejecting page");
                PageCalcError::Overflow { page, limit }
            })?;

        self.limit = limit;
        self.cursor = cursor;
        self.page = page;
        tracing::debug!(cursor, page, limit, "Went to page");
        Ok(())
    }

    fn resolve_limit(&self, limit: Option<u64>) -> PageCalcResult<u64> {
        match limit {
            Some(limit) => self.limit_policy.apply(limit).map_err(|err| {
                tracing::debug!(limit, "Rejecting limit");
                err
            }),
            None => Ok(self.limit),
        }
    }

    /// Returns the number of items on one page.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns the policy used for limits of zero.
    pub fn limit_policy(&self) -> LimitPolicy {
        self.limit_policy
    }

    /// Returns the policy used for cursors that do not start a page.
    pub fn cursor_policy(&self) -> CursorPolicy {
        self.cursor_policy
    }

    /// Returns a snapshot of the current position.
    pub fn position(&self) -> Position {
        Position {
            limit: self.limit,
            cursor: self.cursor,
            page: self.page,
        }
    }

    /// Returns the number of the first item on the current page.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Returns the cursor of the next page, or `None` if it would exceed `total`.
    pub fn next_cursor(&self, total: u64) -> Option<u64> {
        self.cursor
            .checked_add(self.limit)
            .filter(|next| *next <= total)
    }

    /// Returns the cursor of the previous page, or `None` on the first page.
    pub fn previous_cursor(&self) -> Option<u64> {
        (self.cursor > self.limit).then(|| self.cursor - self.limit)
    }

    /// Returns the cursor of the last page of `total` items.
    ///
    /// With a limit of 1 this is `total` itself. An empty collection still has a first page,
    /// so the result is never lower than 1.
    pub fn last_cursor(&self, total: u64) -> u64 {
        (self.total_pages(total) - 1) * self.limit + 1
    }

    /// Returns the number of pages needed for `total` items, at least 1.
    pub fn total_pages(&self, total: u64) -> u64 {
        if self.limit > total {
            1
        } else {
            total.div_ceil(self.limit)
        }
    }

    /// Returns the number of the current page.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Returns the number of the last page, same as [`PageCalc::total_pages`].
    pub fn last_page(&self, total: u64) -> u64 {
        self.total_pages(total)
    }

    /// Returns the number of the next page, or `None` on the last page.
    pub fn next_page(&self, total: u64) -> Option<u64> {
        (self.page < self.total_pages(total)).then(|| self.page + 1)
    }

    /// Returns the number of the previous page, or `None` on the first page.
    pub fn previous_page(&self) -> Option<u64> {
        (self.page > 1).then(|| self.page - 1)
    }

    /// Returns the number of items shown on the current page.
    ///
    /// Every page but the last one is full. The last page holds the remainder of `total`
    /// divided by the limit, or a full page if there is no remainder. Pages past the last
    /// one hold no items.
    pub fn number_of_items(&self, total: u64) -> u64 {
        let last_page = self.last_page(total);

        if self.page < last_page {
            self.limit
        } else if self.page > last_page || total == 0 {
            0
        } else {
            match total % self.limit {
                0 => self.limit,
                remainder => remainder,
            }
        }
    }

    /// Returns an iterator over all pages of `total` items, starting at the first page.
    ///
    /// The calculator itself is not moved.
    pub fn pages(&self, total: u64) -> Pages {
        Pages::new(self.limit, self.total_pages(total), total)
    }
}
