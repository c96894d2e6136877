use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{PageCalcError, PageCalcResult};

/// How a limit of zero is treated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LimitPolicy {
    /// A limit of zero is rejected with [`PageCalcError::InvalidLimit`].
    #[default]
    Strict,
    /// A limit of zero is replaced by 1.
    Clamp,
}

impl LimitPolicy {
    /// Applies the policy to `limit`.
    pub fn apply(self, limit: u64) -> PageCalcResult<u64> {
        match (self, limit) {
            (_, 1..) => Ok(limit),
            (LimitPolicy::Strict, 0) => Err(PageCalcError::InvalidLimit { limit }),
            (LimitPolicy::Clamp, 0) => {
                tracing::warn!(limit, "Clamping limit to 1");
                Ok(1)
            }
        }
    }
}

/// How a cursor that does not start a page is treated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CursorPolicy {
    /// The cursor is rejected with [`PageCalcError::InvalidCursor`].
    #[default]
    Reject,
    /// The cursor is moved down to the first item of the page containing it.
    Snap,
}

impl CursorPolicy {
    /// Checks `cursor` against `limit` and returns the cursor to store.
    ///
    /// `cursor` is expected to be at least 1.
    pub fn apply(self, cursor: u64, limit: u64) -> PageCalcResult<u64> {
        if limit == 1 || cursor % limit == 1 {
            return Ok(cursor);
        }

        match self {
            CursorPolicy::Reject => Err(PageCalcError::InvalidCursor { cursor, limit }),
            CursorPolicy::Snap => {
                let snapped = snap_cursor(cursor, limit);
                tracing::warn!(cursor, limit, snapped, "Snapping cursor to page start");
                Ok(snapped)
            }
        }
    }
}

fn snap_cursor(cursor: u64, limit: u64) -> u64 {
    if cursor < limit {
        1
    } else if cursor % limit == 0 {
        // the last item of a page belongs to the page before the boundary
        (cursor / limit - 1) * limit + 1
    } else {
        (cursor / limit) * limit + 1
    }
}

/// Configuration of a [`PageCalc`](crate::PageCalc).
///
/// ## Example
///
/// ```
/// use page_calc::{CursorPolicy, PageCalc, PageCalcConfig};
///
/// let config = PageCalcConfig::builder()
///     .limit(20)
///     .cursor_policy(CursorPolicy::Snap)
///     .build();
/// let calc = PageCalc::from_config(config).unwrap();
/// assert_eq!(calc.limit(), 20);
/// ```
#[derive(TypedBuilder, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCalcConfig {
    /// Number of items on one page
    pub limit: u64,
    /// Treatment of a limit of zero
    #[builder(default)]
    #[serde(default)]
    pub limit_policy: LimitPolicy,
    /// Treatment of cursors that do not start a page
    #[builder(default)]
    #[serde(default)]
    pub cursor_policy: CursorPolicy,
}

impl PageCalcConfig {
    /// Parses a configuration from JSON.
    ///
    /// Omitted policies fall back to their defaults.
    pub fn from_json(json: &str) -> PageCalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
