//! Pull-based sequence iteration
//!
//! A [`SequenceIterator`] snapshots an ordered collection and yields one
//! element per pull until exhausted, then reports [`PullResult::Done`]
//! forever after.

mod iterator;
mod pull;

pub use iterator::SequenceIterator;
pub use pull::{Pull, PullResult};
