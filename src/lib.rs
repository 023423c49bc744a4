// SPDX-License-Identifier: MIT

//! labelfilter-rs - boolean membership filters over numeric labels
//!
//! Compiles a small infix logic language (`&`, `|`, `!`, parentheses,
//! decimal labels) into an immutable expression tree, then evaluates that
//! tree against arbitrary label collections without re-parsing:
//!
//! ```
//! use labelfilter_rs::Filter;
//!
//! let filter = Filter::<u32>::parse("(1|2)&!3")?;
//! assert!(filter.check(&[1]));
//! assert!(filter.check(&[2, 4]));
//! assert!(!filter.check(&[1, 3]));
//! # Ok::<(), labelfilter_rs::FilterError>(())
//! ```
//!
//! The label type is generic: anything that is `PartialEq` and
//! `TryFrom<u64>` can stand in for `u32` above.

pub mod error;
pub mod filter;

pub use error::FilterError;
pub use filter::{Expr, Filter};
