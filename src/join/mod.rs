//! Draining a sequence into one delimited string
//!
//! The joiner pulls until completion and writes the delimiter strictly
//! between elements: no leading or trailing delimiter, and an empty
//! sequence joins to `""`.

mod config;

use std::fmt::Display;

pub use config::{JoinConfig, DEFAULT_DELIMITER};

/// Concatenates the textual form of every element of a sequence.
#[derive(Debug, Clone, Default)]
pub struct Joiner {
    config: JoinConfig,
}

impl Joiner {
    /// Create a joiner from configuration
    pub fn new(config: JoinConfig) -> Self {
        Self { config }
    }

    /// Delimiter placed between elements.
    pub fn delimiter(&self) -> &str {
        &self.config.delimiter
    }

    /// Drain `items` and return the delimited text.
    ///
    /// Pass `&mut iter` to keep ownership of a [`SequenceIterator`]; it is
    /// exhausted afterwards, so joining it again yields `""`.
    ///
    /// [`SequenceIterator`]: crate::SequenceIterator
    pub fn join<I>(&self, items: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut out = String::new();
        for (idx, item) in items.into_iter().enumerate() {
            if idx > 0 {
                out.push_str(&self.config.delimiter);
            }
            out.push_str(&item.to_string());
        }
        out
    }
}

/// Join with an explicit delimiter.
pub fn join<I>(items: I, delimiter: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    Joiner::new(JoinConfig::new().with_delimiter(delimiter)).join(items)
}

/// Join with [`DEFAULT_DELIMITER`].
pub fn join_default<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    Joiner::default().join(items)
}
