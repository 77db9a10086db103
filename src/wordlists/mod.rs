//! Word lists
//!
//! An embedded dictionary compiled into the binary, plus loaders for
//! one-word-per-line files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
