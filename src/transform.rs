//! The transformation rules and their dispatch.
//!
//! Every rule is a total function over any sequence of strings, including the
//! empty sequence, and always produces a sequence of the same length. Rules
//! consume their input and return a fresh sequence; callers keep no live view
//! of the words they pass in.

use rand::Rng;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::UnknownStyleError;
use crate::style::Style;

/// Transforms `words` with the style named by `style`.
///
/// This is the string-keyed entry point: the name is resolved against the
/// recognized set first, and an unrecognized name fails with
/// [`UnknownStyleError`] before any word is touched. Callers that already
/// hold a parsed [`Style`] can call [`Style::apply`] directly.
///
/// # Example
///
/// ```rust
/// let words = vec!["Hello".to_string(), "World".to_string()];
/// let out = recase::apply(words, "lower").unwrap();
/// assert_eq!(out, vec!["hello", "world"]);
/// ```
///
/// # Errors
///
/// Returns [`UnknownStyleError`] if `style` is not a recognized style name.
pub fn apply(words: Vec<String>, style: &str) -> Result<Vec<String>, UnknownStyleError> {
    let style: Style = style.parse()?;
    Ok(style.apply(words))
}

impl Style {
    /// Transforms `words` with this style.
    ///
    /// Infallible: every style's rule is total over any input, and the output
    /// always has the same length as the input.
    pub fn apply(self, words: Vec<String>) -> Vec<String> {
        match self {
            Style::None => words,
            Style::Alternate => alternate(words),
            Style::Capitalize => capitalize(words),
            Style::Invert => invert(words),
            Style::Lower => lower(words),
            Style::Upper => upper(words),
            Style::Random => random(words),
        }
    }
}

/// Returns "alternating WORD case" words: even indices lower, odd upper.
fn alternate(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .enumerate()
        .map(|(i, w)| {
            if i % 2 == 0 {
                w.to_lowercase()
            } else {
                w.to_uppercase()
            }
        })
        .collect()
}

/// Returns "Capitalise First Letter" words.
fn capitalize(words: Vec<String>) -> Vec<String> {
    words.iter().map(|w| title_case(w)).collect()
}

/// Title-cases each word-boundary-delimited segment: first letter upper,
/// rest lower.
///
/// Boundaries follow UAX #29 word segmentation, which keeps possessives like
/// `it's` together but mishandles some punctuation-adjacent forms; that
/// matches the behavior of common "title each word" utilities and is accepted
/// as a known limitation.
fn title_case(s: &str) -> String {
    s.split_word_bounds()
        .map(|segment| {
            let mut graphemes = segment.graphemes(true);
            match graphemes.next() {
                Some(first) => format!("{}{}", first.to_uppercase(), graphemes.as_str().to_lowercase()),
                None => String::new(),
            }
        })
        .collect()
}

/// Returns "cAPITALISE eVERY lETTER eXCEPT tHE fIRST" words.
///
/// Uses the upper-case mapping for the tail characters. The title-case
/// mapping this rule nominally wants differs only for a handful of digraph
/// characters, and `std` exposes no per-character title-case conversion.
fn invert(words: Vec<String>) -> Vec<String> {
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            let mut out = String::with_capacity(w.len());
            if let Some(first) = chars.next() {
                out.push(first);
                for c in chars {
                    out.extend(c.to_uppercase());
                }
            }
            out
        })
        .collect()
}

/// Returns "lower case" words.
fn lower(words: Vec<String>) -> Vec<String> {
    words.into_iter().map(|w| w.to_lowercase()).collect()
}

/// Returns "UPPER CASE" words.
fn upper(words: Vec<String>) -> Vec<String> {
    words.into_iter().map(|w| w.to_uppercase()).collect()
}

/// Returns "EVERY word randomly CAPITALISED or NOT" words.
///
/// Each word is decided independently with a fair coin. The generator is the
/// thread-local one, seeded once per thread, so concurrent callers never
/// contend and rapid successive calls are not correlated.
fn random(words: Vec<String>) -> Vec<String> {
    let mut rng = rand::thread_rng();
    words
        .into_iter()
        .map(|w| {
            if rng.gen_bool(0.5) {
                w.to_uppercase()
            } else {
                w.to_lowercase()
            }
        })
        .collect()
}
