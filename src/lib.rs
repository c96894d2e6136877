#![warn(missing_docs)]
#![crate_name = "page_calc"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Page Calculator
//!
//! `page_calc` translates between the two ways of describing a position within paged results:
//! the cursor, which is the number of the first item on the current page, and the page number.
//! Both start at 1.
//!
//! ## Usage
//!
//! ```rust
//! use page_calc::{PageCalc, PageCalcError};
//!
//! let mut calc = PageCalc::new(3).unwrap();
//! calc.move_cursor(4, None).unwrap();
//!
//! assert_eq!(calc.page(), 2);
//! assert_eq!(calc.next_cursor(10), Some(7));
//! assert_eq!(calc.previous_cursor(), Some(1));
//! assert_eq!(calc.last_cursor(10), 10);
//! assert_eq!(calc.total_pages(10), 4);
//! assert_eq!(calc.number_of_items(10), 3);
//!
//! // 2 is not the first item of a page when there are 3 items per page
//! assert!(matches!(
//!     calc.move_cursor(2, None),
//!     Err(PageCalcError::InvalidCursor { cursor: 2, limit: 3 })
//! ));
//! ```

extern crate serde;
extern crate serde_json;

/// Module containing the calculator.
pub mod calc;
/// Module containing the configuration and its policies.
pub mod config;
/// Module containing the error type.
pub mod error;
/// Module containing the page iterator.
pub mod pages;
/// Module containing position snapshots.
pub mod position;

pub use calc::PageCalc;
pub use config::{CursorPolicy, LimitPolicy, PageCalcConfig};
pub use error::PageCalcError;
pub use pages::{PageWindow, Pages};
pub use position::Position;

/// Result type for the page-calc crate.
pub type PageCalcResult<T> = std::result::Result<T, error::PageCalcError>;
