//! Joiner configuration

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = " | ";

/// Configuration parameters for joining
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JoinConfig {
    /// Text placed between consecutive elements
    pub delimiter: String,
}

impl JoinConfig {
    /// Configuration with the default `" | "` delimiter.
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Set the delimiter (may be empty).
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self::new()
    }
}
