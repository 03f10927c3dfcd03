//! Immutable puzzle data: word groups, boards, and the catalog.
//!
//! Everything here is static once assembled. Sessions only read it;
//! the catalog has no knowledge of play-through state.

pub mod board;
pub mod builtin;
pub mod group;
pub mod table;

pub use board::{Board, GROUPS_PER_BOARD, WORDS_PER_BOARD};
pub use group::{WordGroup, WORDS_PER_GROUP};
pub use table::Catalog;
