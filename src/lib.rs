//! # connections-engine
//!
//! A headless engine for "Connections"-style word puzzles: sixteen
//! shuffled words drawn from four thematic groups of four, guessed four
//! at a time, with four lives.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, input handling, or persistence. The
//!    engine is a pure state machine a presentation layer queries and
//!    drives through three transitions.
//!
//! 2. **No ambient state**: A play-through is an explicitly owned
//!    [`Session`] value, trivially testable without a UI.
//!
//! 3. **Defended transitions**: UI-driven calls outside their
//!    preconditions (toggling an unknown word, submitting early, acting
//!    after game over) are defined no-ops, never errors.
//!
//! 4. **Injectable randomness**: Board choice and word shuffling run on
//!    a seedable [`GameRng`], so tests are deterministic and real play
//!    draws from entropy.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG
//! - `catalog`: immutable puzzle data (groups, boards, the built-in table)
//! - `session`: the mutable play-through and its transitions
//!
//! ## Example
//!
//! ```
//! use connections_engine::{GuessOutcome, Session};
//!
//! let mut session = Session::builder().seed(42).build();
//!
//! // Guess the first group on the board (a real player sees only the
//! // shuffled pool, but tests may peek).
//! let words = session.board().groups()[0].words().clone();
//! for word in &words {
//!     session.toggle_word(word);
//! }
//!
//! assert_eq!(session.submit_selection(), Some(GuessOutcome::Correct));
//! assert_eq!(session.found_groups().len(), 1);
//! ```

pub mod catalog;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState};

pub use crate::catalog::{
    Board, Catalog, WordGroup, GROUPS_PER_BOARD, WORDS_PER_BOARD, WORDS_PER_GROUP,
};

pub use crate::session::{GameStatus, GuessOutcome, Session, SessionBuilder, DEFAULT_LIVES};
