//! Property tests over arbitrary click sequences.
//!
//! The presentation layer can click anything in any order; these
//! properties pin down what the session guarantees regardless.

use proptest::prelude::*;
use std::collections::HashSet;

use connections_engine::{Session, SessionBuilder};

/// A click: toggle one of the 16 grid positions, or hit submit.
#[derive(Clone, Debug)]
enum Click {
    Toggle(usize),
    Submit,
}

fn click_strategy() -> impl Strategy<Value = Click> {
    prop_oneof![
        4 => (0usize..16).prop_map(Click::Toggle),
        1 => Just(Click::Submit),
    ]
}

fn apply(session: &mut Session, click: &Click) {
    match click {
        Click::Toggle(i) => {
            if !session.word_pool().is_empty() {
                let word = session.word_pool()[i % session.word_pool().len()].clone();
                session.toggle_word(&word);
            }
        }
        Click::Submit => {
            session.submit_selection();
        }
    }
}

/// The invariants every reachable state satisfies.
fn check_invariants(session: &Session) -> Result<(), TestCaseError> {
    // Selection is bounded and drawn from the pool.
    prop_assert!(session.selection().len() <= 4);
    for word in session.selection() {
        prop_assert!(session.word_pool().contains(word));
    }

    // Pool is exactly the words of the groups not yet found.
    let expected: HashSet<&str> = session
        .board()
        .groups()
        .iter()
        .filter(|g| !session.found_groups().contains(*g))
        .flat_map(|g| g.words().iter().map(String::as_str))
        .collect();
    let pool: HashSet<&str> = session.word_pool().iter().map(String::as_str).collect();
    prop_assert_eq!(pool, expected);
    prop_assert_eq!(session.word_pool().len(), 16 - 4 * session.found_groups().len());

    // Bounded counters, coherent terminal flag.
    prop_assert!(session.lives() <= 4);
    prop_assert!(session.found_groups().len() <= 4);
    prop_assert_eq!(
        session.is_over(),
        session.found_groups().len() == 4 || session.lives() == 0
    );

    Ok(())
}

proptest! {
    #[test]
    fn session_invariants_hold_under_any_clicks(
        seed in any::<u64>(),
        clicks in prop::collection::vec(click_strategy(), 0..200),
    ) {
        let mut session = SessionBuilder::new().seed(seed).build();
        check_invariants(&session)?;

        for click in &clicks {
            apply(&mut session, click);
            check_invariants(&session)?;
        }
    }

    #[test]
    fn terminal_state_never_regresses(
        seed in any::<u64>(),
        clicks in prop::collection::vec(click_strategy(), 0..300),
    ) {
        let mut session = SessionBuilder::new().seed(seed).build();
        let mut was_over = false;

        for click in &clicks {
            apply(&mut session, click);
            if was_over {
                prop_assert!(session.is_over());
            }
            was_over = session.is_over();
        }
    }

    #[test]
    fn lives_only_decrease_within_a_game(
        seed in any::<u64>(),
        clicks in prop::collection::vec(click_strategy(), 0..200),
    ) {
        let mut session = SessionBuilder::new().seed(seed).build();
        let mut last_lives = session.lives();

        for click in &clicks {
            apply(&mut session, click);
            prop_assert!(session.lives() <= last_lives);
            last_lives = session.lives();
        }
    }
}
