//! Boards - one complete puzzle instance.
//!
//! A `Board` is four word groups, sixteen words total. Construction
//! enforces the well-formedness invariant the whole engine leans on:
//! all sixteen words are pairwise distinct, so any four-word selection
//! can match at most one group.

use serde::{Deserialize, Serialize};

use super::group::{WordGroup, WORDS_PER_GROUP};

/// Number of groups on every board.
pub const GROUPS_PER_BOARD: usize = 4;

/// Number of words on every board.
pub const WORDS_PER_BOARD: usize = GROUPS_PER_BOARD * WORDS_PER_GROUP;

/// One complete puzzle: four groups of four related words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    groups: [WordGroup; GROUPS_PER_BOARD],
}

impl Board {
    /// Create a new board from four groups.
    ///
    /// Panics if any word appears in more than one group. Like group
    /// construction, this guards static catalog data at assembly time.
    #[must_use]
    pub fn new(groups: [WordGroup; GROUPS_PER_BOARD]) -> Self {
        for i in 0..GROUPS_PER_BOARD {
            for j in (i + 1)..GROUPS_PER_BOARD {
                for word in groups[i].words() {
                    if groups[j].contains(word) {
                        panic!(
                            "word {:?} appears in both {:?} and {:?}",
                            word,
                            groups[i].connection(),
                            groups[j].connection()
                        );
                    }
                }
            }
        }

        Self { groups }
    }

    /// The four groups, in catalog order.
    #[must_use]
    pub fn groups(&self) -> &[WordGroup; GROUPS_PER_BOARD] {
        &self.groups
    }

    /// All sixteen words, group by group in catalog order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flat_map(|g| g.words().iter().map(String::as_str))
    }

    /// Check whether a word appears anywhere on the board.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.groups.iter().any(|g| g.contains(word))
    }

    /// Find the group a four-word selection matches exactly, if any.
    ///
    /// Because the board's words are pairwise distinct, at most one
    /// group can match; no tie-break is needed.
    #[must_use]
    pub fn group_matching(&self, selection: &[String]) -> Option<&WordGroup> {
        self.groups.iter().find(|g| g.matches(selection))
    }
}
