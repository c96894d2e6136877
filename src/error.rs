/// Error type for the page-calc crate.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PageCalcError {
    /// The number of items per page must be higher than zero.
    #[error("Invalid limit {limit}, only values higher than zero are accepted.")]
    #[diagnostic(
        code(page_calc::error::PageCalcError::InvalidLimit),
        help("Pass a limit of at least 1 or use `LimitPolicy::Clamp`.")
    )]
    InvalidLimit {
        /// The rejected limit.
        limit: u64,
    },

    /// The cursor does not point at the first item of a page.
    #[error("Invalid cursor position {cursor} for limit {limit}.")]
    #[diagnostic(
        code(page_calc::error::PageCalcError::InvalidCursor),
        help("A cursor must satisfy `cursor % limit == 1`, or use `CursorPolicy::Snap`.")
    )]
    InvalidCursor {
        /// The rejected cursor.
        cursor: u64,
        /// The limit the cursor was checked against.
        limit: u64,
    },

    /// The cursor of the requested page does not fit into an `u64`.
    #[error("Page {page} with limit {limit} is out of range.")]
    #[diagnostic(code(page_calc::error::PageCalcError::Overflow))]
    Overflow {
        /// The requested page.
        page: u64,
        /// The limit used for the calculation.
        limit: u64,
    },

    /// The configuration could not be parsed.
    #[error(transparent)]
    #[diagnostic(code(page_calc::error::PageCalcError::InvalidConfig))]
    InvalidConfig(#[from] serde_json::Error),
}
