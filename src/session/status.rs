//! Session outcome types.

use serde::{Deserialize, Serialize};

/// Where a play-through stands.
///
/// Derived from the session's found-group count and remaining lives.
/// `Won` and `Lost` are terminal: only starting a new game leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Groups remain and lives remain.
    InProgress,
    /// All four groups found.
    Won,
    /// Lives exhausted before the fourth group.
    Lost,
}

impl GameStatus {
    /// Check whether the session accepts further guesses.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Result of a single submitted guess.
///
/// A guess is evaluated as a whole: it either matches one group exactly
/// or costs a life. There is no partial credit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The selection matched a group; it is now revealed.
    Correct,
    /// The selection matched no group; one life was lost.
    Incorrect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
    }
}
