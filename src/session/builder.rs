//! Session configuration.

use crate::catalog::Catalog;
use crate::core::GameRng;

use super::Session;

/// Default number of allowed incorrect guesses.
pub const DEFAULT_LIVES: u8 = 4;

/// Builder for creating a [`Session`].
///
/// Defaults: built-in catalog, four lives, entropy seed. `build()`
/// starts the first game immediately.
///
/// ## Example
///
/// ```
/// use connections_engine::session::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .starting_lives(2)
///     .seed(42)
///     .build();
///
/// assert_eq!(session.lives(), 2);
/// ```
pub struct SessionBuilder {
    catalog: Option<Catalog>,
    starting_lives: u8,
    seed: Option<u64>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            catalog: None,
            starting_lives: DEFAULT_LIVES,
            seed: None,
        }
    }
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw boards from a custom catalog instead of the built-in table.
    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Number of allowed incorrect guesses. Must be at least 1.
    #[must_use]
    pub fn starting_lives(mut self, lives: u8) -> Self {
        assert!(lives >= 1, "a session needs at least one life");
        self.starting_lives = lives;
        self
    }

    /// Fix the RNG seed for a reproducible session.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the session and start its first game.
    ///
    /// Panics on an empty catalog; a catalog with no boards is a static
    /// misconfiguration, not a runtime condition.
    #[must_use]
    pub fn build(self) -> Session {
        let catalog = self.catalog.unwrap_or_else(Catalog::builtin);
        assert!(!catalog.is_empty(), "catalog must contain at least one board");

        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Session::from_parts(catalog, self.starting_lives, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Board, WordGroup};

    #[test]
    fn test_defaults() {
        let session = SessionBuilder::new().seed(1).build();

        assert_eq!(session.lives(), DEFAULT_LIVES);
        assert_eq!(session.catalog().len(), Catalog::builtin().len());
    }

    #[test]
    fn test_custom_catalog() {
        let mut catalog = Catalog::new();
        catalog.push(Board::new([
            WordGroup::new("Frutta", ["Mela", "Pera", "Banana", "Arancia"]),
            WordGroup::new("Animali", ["Cane", "Gatto", "Topo", "Cavallo"]),
            WordGroup::new("Colori", ["Rosso", "Blu", "Verde", "Giallo"]),
            WordGroup::new("Piatti", ["Pizza", "Pasta", "Risotto", "Lasagna"]),
        ]));

        let session = SessionBuilder::new().catalog(catalog).seed(1).build();

        // Only one board to pick from.
        assert!(session.board().contains("Mela"));
        assert_eq!(session.catalog().len(), 1);
    }

    #[test]
    fn test_custom_lives() {
        let session = SessionBuilder::new().starting_lives(1).seed(1).build();
        assert_eq!(session.lives(), 1);
    }

    #[test]
    #[should_panic(expected = "at least one life")]
    fn test_zero_lives_panics() {
        let _ = SessionBuilder::new().starting_lives(0);
    }

    #[test]
    #[should_panic(expected = "at least one board")]
    fn test_empty_catalog_panics() {
        let _ = SessionBuilder::new().catalog(Catalog::new()).build();
    }
}
