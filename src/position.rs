use std::fmt;

use serde::{Deserialize, Serialize};

/// Snapshot of the position of a [`PageCalc`](crate::PageCalc).
///
/// `cursor` and `page` always describe the same page:
/// `cursor == (page - 1) * limit + 1`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Number of items on one page
    pub limit: u64,
    /// Number of the first item on the current page
    pub cursor: u64,
    /// Number of the current page
    pub page: u64,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page {} (cursor {}, limit {})",
            self.page, self.cursor, self.limit
        )
    }
}
