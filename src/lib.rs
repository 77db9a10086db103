//! Wordle Sieve
//!
//! Narrows a five-letter word list with Wordle clues and ranks the survivors
//! by how many common letters they cover.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sieve::core::Clues;
//! use wordle_sieve::ranker::Limit;
//! use wordle_sieve::session::Session;
//! use wordle_sieve::wordlists::{WORDS, loader::words_from_slice};
//!
//! let words = words_from_slice(WORDS);
//! let session = Session::new(&words).unwrap();
//!
//! // A at the start, E at the end, L somewhere but not second, no S or T
//! let clues = Clues::new(
//!     &[Some('a'), None, None, None, Some('e')],
//!     &[(1, 'l')],
//!     &['s', 't'],
//! )
//! .unwrap();
//!
//! let ranking = session.rank(&clues, Limit::new(5));
//! for scored in &ranking.candidates {
//!     println!("{} {}", scored.word, scored.score);
//! }
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Clue filtering
pub mod filter;

// Letter-frequency ranking
pub mod ranker;

// Word list plus analysed ranker
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
