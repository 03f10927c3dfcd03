//! Word groups - the atomic unit of puzzle data.
//!
//! A `WordGroup` is four related words plus the label describing what
//! connects them ("Frutta", "European capitals", ...). Groups are static
//! data: built once when the catalog is assembled, never mutated.

use serde::{Deserialize, Serialize};

/// Number of words in every group.
pub const WORDS_PER_GROUP: usize = 4;

/// Four related words sharing a labeled theme.
///
/// ## Example
///
/// ```
/// use connections_engine::catalog::WordGroup;
///
/// let fruit = WordGroup::new("Frutta", ["Mela", "Pera", "Banana", "Arancia"]);
/// assert!(fruit.contains("Mela"));
/// assert_eq!(fruit.connection(), "Frutta");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGroup {
    words: [String; WORDS_PER_GROUP],
    connection: String,
}

impl WordGroup {
    /// Create a new word group.
    ///
    /// Panics if the four words are not pairwise distinct. Groups are
    /// static catalog data, so a duplicate is a construction bug, not a
    /// runtime condition.
    #[must_use]
    pub fn new<W: Into<String>>(connection: impl Into<String>, words: [W; WORDS_PER_GROUP]) -> Self {
        let words = words.map(Into::into);
        let connection = connection.into();

        for i in 0..WORDS_PER_GROUP {
            for j in (i + 1)..WORDS_PER_GROUP {
                if words[i] == words[j] {
                    panic!("duplicate word {:?} in group {:?}", words[i], connection);
                }
            }
        }

        Self { words, connection }
    }

    /// The four words, in catalog order.
    #[must_use]
    pub fn words(&self) -> &[String; WORDS_PER_GROUP] {
        &self.words
    }

    /// The label describing what connects the words.
    #[must_use]
    pub fn connection(&self) -> &str {
        &self.connection
    }

    /// Check whether a word belongs to this group.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Check whether a selection of words is exactly this group.
    ///
    /// Equality is as sets: the selection must have four distinct words
    /// and every word of the group must appear in it.
    #[must_use]
    pub fn matches(&self, selection: &[String]) -> bool {
        selection.len() == WORDS_PER_GROUP
            && self.words.iter().all(|w| selection.contains(w))
    }
}
