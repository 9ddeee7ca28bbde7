//! Case transformations for ordered sequences of words.
//!
//! This crate maps a style name to a pure transformation over a sequence of
//! word fragments:
//!
//! - [`Style`]: The recognized transformations and their string names
//! - [`apply`]: Resolve a style name and transform a word sequence
//! - [`UnknownStyleError`]: Error for unrecognized style names
//!
//! Transformations are element-wise, length-preserving, and Unicode-aware.
//! There is no I/O and no state beyond a read-only registry of style names;
//! every call is independent and safe to make from any thread.
//!
//! # Example
//!
//! ```rust
//! use recase::{apply, Style};
//!
//! let words = vec!["Hello".to_string(), "World".to_string(), "Foo".to_string()];
//! let out = apply(words, "alternate").unwrap();
//! assert_eq!(out, vec!["hello", "WORLD", "foo"]);
//!
//! assert!(recase::apply(vec![], "bogus").is_err());
//! assert_eq!(Style::ALL.len(), 7);
//! ```

mod error;
mod style;
mod transform;

pub use error::UnknownStyleError;
pub use style::Style;
pub use transform::apply;
