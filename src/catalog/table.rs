//! Puzzle catalog - the fixed table of boards a session draws from.
//!
//! The `Catalog` is an ordered, index-addressed collection of boards.
//! It is assembled once (usually via [`Catalog::builtin`]) and only
//! queried afterwards; nothing in the engine mutates it mid-session.

use serde::{Deserialize, Serialize};

use super::board::Board;

/// Ordered collection of puzzle boards.
///
/// ## Example
///
/// ```
/// use connections_engine::catalog::Catalog;
///
/// let catalog = Catalog::builtin();
/// assert!(!catalog.is_empty());
///
/// let first = catalog.get(0).unwrap();
/// assert_eq!(first.groups().len(), 4);
/// assert!(catalog.get(catalog.len()).is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    boards: Vec<Board>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a list of boards.
    #[must_use]
    pub fn from_boards(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// Append a board during assembly.
    pub fn push(&mut self, board: Board) {
        self.boards.push(board);
    }

    /// Get the board at an index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Get the board at an index, panicking if out of range.
    ///
    /// Use when the index has already been bounds-checked.
    #[must_use]
    pub fn get_unchecked(&self, index: usize) -> &Board {
        self.boards.get(index).expect("board index out of range")
    }

    /// Number of boards in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Iterate over all boards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }
}
