//! # Pull-based sequence iteration and joining
//!
//! This library wraps an ordered, in-memory collection in a
//! [`SequenceIterator`] that yields one element per pull and then reports
//! completion forever after, and a [`Joiner`] that drains such an
//! iterator into a single delimited string.
//!
//! ## Components
//!
//! 1. **Sequence**: snapshot + cursor, [`PullResult`] per pull
//! 2. **Join**: delimiter strictly between elements, `""` for nothing
//! 3. **Report**: departments of employees, flattened in insertion order
//!
//! ## Usage Example
//!
//! ```
//! use rollcall::{join_default, Report, SequenceIterator};
//!
//! let it = SequenceIterator::new(["a", "b", "c"]);
//! assert_eq!(join_default(it), "a | b | c");
//!
//! let report = Report::parse("engineering: Ann, Bob\nmarketing: Cy")?;
//! assert_eq!(join_default(report.employees_iter()), "Ann | Bob | Cy");
//! # Ok::<(), rollcall::ReportError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod sequence; // Snapshot iterator and pull results
pub mod join;     // Delimited joining
pub mod report;   // Department reports

// Re-exports for convenience
pub use sequence::{Pull, PullResult, SequenceIterator};
pub use join::{join, join_default, JoinConfig, Joiner, DEFAULT_DELIMITER};
pub use report::{Department, Report, ReportError};
