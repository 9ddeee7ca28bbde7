//! Style resolution errors.

use crate::style::Style;

/// Error returned when a style name does not match any recognized style.
///
/// Carries the offending name so callers can render it back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyleError {
    name: String,
}

impl UnknownStyleError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for UnknownStyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" is not a valid transformation", self.name)?;
        let names: Vec<&str> = Style::ALL.iter().map(|s| s.name()).collect();
        write!(f, " (expected one of: {})", names.join(", "))
    }
}

impl std::error::Error for UnknownStyleError {}
