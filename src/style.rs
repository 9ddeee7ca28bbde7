//! Named case-transformation styles.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::UnknownStyleError;

/// A named case transformation applied element-wise to a sequence of words.
///
/// Each variant maps 1:1 to a stable string token, so styles can round-trip
/// through user-facing configuration:
///
/// ```rust
/// use recase::Style;
///
/// let style: Style = "alternate".parse().unwrap();
/// assert_eq!(style, Style::Alternate);
/// assert_eq!(style.name(), "alternate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Leave every word unchanged.
    None,
    /// Lower-case words at even indices, upper-case words at odd indices.
    Alternate,
    /// Title-case each word-boundary-delimited segment of every word.
    Capitalize,
    /// Upper-case every character of a word except the first.
    Invert,
    /// Lower-case every word.
    Lower,
    /// Upper-case every word.
    Upper,
    /// Independently upper- or lower-case each word, 50/50.
    Random,
}

/// Registry of recognized style names, built once and read-only thereafter.
static STYLES_BY_NAME: Lazy<HashMap<&'static str, Style>> =
    Lazy::new(|| Style::ALL.iter().map(|s| (s.name(), *s)).collect());

impl Style {
    /// Every recognized style, in a stable order.
    pub const ALL: [Style; 7] = [
        Style::None,
        Style::Alternate,
        Style::Capitalize,
        Style::Invert,
        Style::Lower,
        Style::Upper,
        Style::Random,
    ];

    /// The string token naming this style.
    pub fn name(self) -> &'static str {
        match self {
            Style::None => "none",
            Style::Alternate => "alternate",
            Style::Capitalize => "capitalize",
            Style::Invert => "invert",
            Style::Lower => "lower",
            Style::Upper => "upper",
            Style::Random => "random",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = UnknownStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STYLES_BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| UnknownStyleError::new(s))
    }
}
