//! Built-in puzzle table.
//!
//! Five Italian-themed boards, fixed at compile time. Board and group
//! well-formedness is enforced by the constructors, so a typo that
//! duplicates a word fails fast the first time the table is built.

use super::board::Board;
use super::group::WordGroup;
use super::table::Catalog;

impl Catalog {
    /// The built-in table of five Italian-themed boards.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_boards(vec![
            Board::new([
                WordGroup::new("Frutta", ["Mela", "Pera", "Banana", "Arancia"]),
                WordGroup::new("Animali", ["Cane", "Gatto", "Topo", "Cavallo"]),
                WordGroup::new("Colori", ["Rosso", "Blu", "Verde", "Giallo"]),
                WordGroup::new("Piatti italiani", ["Pizza", "Pasta", "Risotto", "Lasagna"]),
            ]),
            Board::new([
                WordGroup::new("Capitali europee", ["Roma", "Parigi", "Londra", "Berlino"]),
                WordGroup::new(
                    "Strumenti musicali",
                    ["Violino", "Pianoforte", "Flauto", "Chitarra"],
                ),
                WordGroup::new("Sport", ["Calcio", "Tennis", "Nuoto", "Pallacanestro"]),
                WordGroup::new("Stagioni", ["Primavera", "Estate", "Autunno", "Inverno"]),
            ]),
            Board::new([
                WordGroup::new("Poeti italiani", ["Dante", "Petrarca", "Boccaccio", "Ariosto"]),
                WordGroup::new(
                    "Artisti del Rinascimento",
                    ["Leonardo", "Michelangelo", "Raffaello", "Donatello"],
                ),
                WordGroup::new("Vulcani italiani", ["Vesuvio", "Etna", "Stromboli", "Vulcano"]),
                WordGroup::new("Città italiane", ["Venezia", "Firenze", "Napoli", "Milano"]),
            ]),
            Board::new([
                WordGroup::new("Tipi di caffè", ["Cappuccino", "Espresso", "Macchiato", "Latte"]),
                WordGroup::new(
                    "Monumenti italiani",
                    ["Colosseo", "Torre di Pisa", "Duomo di Milano", "Ponte di Rialto"],
                ),
                WordGroup::new(
                    "Marche di auto italiane",
                    ["Ferrari", "Lamborghini", "Maserati", "Alfa Romeo"],
                ),
                WordGroup::new(
                    "Formaggi italiani",
                    ["Parmigiano", "Mozzarella", "Gorgonzola", "Pecorino"],
                ),
            ]),
            Board::new([
                WordGroup::new("Compositori d'opera", ["Verdi", "Puccini", "Rossini", "Bellini"]),
                WordGroup::new(
                    "Tipi di pizza",
                    ["Margherita", "Marinara", "Quattro Formaggi", "Capricciosa"],
                ),
                WordGroup::new("Vini italiani", ["Chianti", "Barolo", "Prosecco", "Amarone"]),
                WordGroup::new(
                    "Personaggi di Pinocchio",
                    ["Pinocchio", "Geppetto", "Fata Turchina", "Lucignolo"],
                ),
            ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::board::WORDS_PER_BOARD;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_five_boards() {
        assert_eq!(Catalog::builtin().len(), 5);
    }

    #[test]
    fn test_builtin_boards_are_well_formed() {
        // Constructors already panic on duplicates; this re-checks the
        // invariant from the outside.
        for board in Catalog::builtin().iter() {
            let words: HashSet<&str> = board.words().collect();
            assert_eq!(words.len(), WORDS_PER_BOARD);

            for group in board.groups() {
                assert_eq!(group.words().len(), 4);
            }
        }
    }

    #[test]
    fn test_builtin_connections_are_labeled() {
        for board in Catalog::builtin().iter() {
            for group in board.groups() {
                assert!(!group.connection().is_empty());
            }
        }
    }
}
