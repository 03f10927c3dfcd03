//! The mutable state of one play-through.
//!
//! ## Model
//!
//! A `Session` owns a catalog and, per game, an active board, a shuffled
//! word pool, the player's current selection, the groups found so far,
//! and a life counter. The pool is shuffled exactly once per game and
//! only ever shrinks afterwards, so the grid layout stays stable while
//! solved rows disappear.
//!
//! ## No-op semantics
//!
//! The presentation layer is expected to disable controls outside their
//! preconditions, but the session defends anyway: toggling an unknown
//! word, submitting with fewer than four selected, or acting after the
//! game is over all leave the state untouched. Nothing here is an error.

use smallvec::SmallVec;

use crate::catalog::{Board, Catalog, WordGroup, GROUPS_PER_BOARD, WORDS_PER_GROUP};
use crate::core::GameRng;

use super::status::{GameStatus, GuessOutcome};

/// One play-through of a Connections board.
///
/// ## Example
///
/// ```
/// use connections_engine::session::Session;
///
/// let mut session = Session::builder().seed(42).build();
/// assert_eq!(session.word_pool().len(), 16);
/// assert_eq!(session.lives(), 4);
///
/// let first = session.word_pool()[0].clone();
/// session.toggle_word(&first);
/// assert!(session.is_selected(&first));
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    catalog: Catalog,
    starting_lives: u8,
    rng: GameRng,

    board_index: usize,
    word_pool: Vec<String>,
    selection: SmallVec<[String; WORDS_PER_GROUP]>,
    found_groups: Vec<WordGroup>,
    lives: u8,
}

impl Session {
    /// Start a session over the built-in catalog with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Builder for a configured session.
    #[must_use]
    pub fn builder() -> super::SessionBuilder {
        super::SessionBuilder::new()
    }

    pub(super) fn from_parts(catalog: Catalog, starting_lives: u8, rng: GameRng) -> Self {
        let mut session = Self {
            catalog,
            starting_lives,
            rng,
            board_index: 0,
            word_pool: Vec::new(),
            selection: SmallVec::new(),
            found_groups: Vec::new(),
            lives: starting_lives,
        };
        session.start_new_game();
        session
    }

    // === Transitions ===

    /// Start a fresh game, replacing the current one wholesale.
    ///
    /// Picks a board uniformly at random from the catalog, lays out its
    /// sixteen words in a fresh uniform permutation, and resets selection,
    /// found groups, and lives.
    pub fn start_new_game(&mut self) {
        self.board_index = self.rng.gen_range_usize(0..self.catalog.len());

        let mut pool: Vec<String> = self
            .catalog
            .get_unchecked(self.board_index)
            .words()
            .map(str::to_string)
            .collect();
        self.rng.shuffle(&mut pool);

        self.word_pool = pool;
        self.selection.clear();
        self.found_groups.clear();
        self.lives = self.starting_lives;
    }

    /// Toggle a word in or out of the current selection.
    ///
    /// No-op if the game is over, the word is not in the pool, or the
    /// word is new and the selection already holds four (the overflow
    /// click is silently ignored).
    pub fn toggle_word(&mut self, word: &str) {
        if self.is_over() || !self.word_pool.iter().any(|w| w == word) {
            return;
        }

        if let Some(pos) = self.selection.iter().position(|w| w == word) {
            self.selection.remove(pos);
        } else if self.selection.len() < WORDS_PER_GROUP {
            self.selection.push(word.to_string());
        }
    }

    /// Submit the current four-word selection as a guess.
    ///
    /// Returns `None` without touching state unless the game is active
    /// and exactly four words are selected. A correct guess reveals the
    /// matched group and removes its words from the pool; an incorrect
    /// one costs a life. Either way the selection clears.
    pub fn submit_selection(&mut self) -> Option<GuessOutcome> {
        if self.is_over() || self.selection.len() != WORDS_PER_GROUP {
            return None;
        }

        let matched = self
            .catalog
            .get_unchecked(self.board_index)
            .group_matching(&self.selection)
            .cloned();

        let outcome = match matched {
            Some(group) => {
                self.word_pool.retain(|w| !group.contains(w));
                self.found_groups.push(group);
                GuessOutcome::Correct
            }
            None => {
                self.lives -= 1;
                GuessOutcome::Incorrect
            }
        };

        self.selection.clear();
        Some(outcome)
    }

    // === Observable state ===

    /// The board being played. On a loss, this is the full answer reveal.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.catalog.get_unchecked(self.board_index)
    }

    /// Words still on the grid, in the order established at game start.
    #[must_use]
    pub fn word_pool(&self) -> &[String] {
        &self.word_pool
    }

    /// The current selection, in click order (0 to 4 words).
    #[must_use]
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Check whether a word is currently selected.
    #[must_use]
    pub fn is_selected(&self, word: &str) -> bool {
        self.selection.iter().any(|w| w == word)
    }

    /// Groups found so far, in solve order.
    #[must_use]
    pub fn found_groups(&self) -> &[WordGroup] {
        &self.found_groups
    }

    /// Remaining lives.
    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Where the play-through stands.
    ///
    /// A submission is evaluated as wholly correct or wholly incorrect,
    /// so `Won` and `Lost` cannot both be reachable at once.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.found_groups.len() == GROUPS_PER_BOARD {
            GameStatus::Won
        } else if self.lives == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Check whether the game has ended (won or lost).
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// The catalog this session draws boards from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Seed of the session's RNG, for reproducing a run.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
