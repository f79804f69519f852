use cardviewer::model::{Flashcard, WordCard};
use cardviewer::ui::deck::{DeckIntent, DeckReducer, DeckState};
use cardviewer::ui::mvi::Reducer;

fn cards(n: usize) -> Vec<Flashcard> {
    (0..n)
        .map(|i| Flashcard {
            question: format!("Q{}", i),
            answer: format!("A{}", i),
        })
        .collect()
}

fn loaded(n: usize) -> DeckState<Flashcard> {
    DeckReducer::<Flashcard>::reduce(DeckState::default(), DeckIntent::Loaded { items: cards(n) })
}

fn step(state: DeckState<Flashcard>, intent: DeckIntent<Flashcard>) -> DeckState<Flashcard> {
    DeckReducer::<Flashcard>::reduce(state, intent)
}

#[test]
fn next_n_times_returns_to_start() {
    for n in 1..=6 {
        for start in 0..n {
            let mut state = loaded(n);
            for _ in 0..start {
                state = step(state, DeckIntent::Next);
            }
            assert_eq!(state.index(), start);

            for _ in 0..n {
                state = step(state, DeckIntent::Next);
            }
            assert_eq!(state.index(), start, "n = {}", n);
        }
    }
}

#[test]
fn prev_undoes_next() {
    for n in 1..=5 {
        let mut state = loaded(n);
        for _ in 0..n + 2 {
            let before = state.index();
            state = step(state, DeckIntent::Next);
            state = step(state, DeckIntent::Prev);
            assert_eq!(state.index(), before);
            state = step(state, DeckIntent::Next);
        }
    }
}

#[test]
fn prev_from_first_wraps_to_last() {
    let state = step(loaded(4), DeckIntent::Prev);
    assert_eq!(state.index(), 3);
    assert_eq!(state.position(), Some((4, 4)));
}

#[test]
fn single_card_navigation_is_identity() {
    let state = step(step(loaded(1), DeckIntent::Next), DeckIntent::Prev);
    assert_eq!(state.index(), 0);
}

#[test]
fn navigation_always_hides_answer() {
    let revealed = step(loaded(3), DeckIntent::ToggleReveal);
    assert!(revealed.revealed());
    assert!(!step(revealed.clone(), DeckIntent::Next).revealed());
    assert!(!step(revealed, DeckIntent::Prev).revealed());
}

#[test]
fn index_stays_in_bounds_after_shorter_reload() {
    let mut state = loaded(5);
    for _ in 0..4 {
        state = step(state, DeckIntent::Next);
    }
    let state = step(state, DeckIntent::Loaded { items: cards(2) });
    assert_eq!(state.index(), 1);
    assert!(state.current().is_some());

    let state = step(state, DeckIntent::Loaded { items: Vec::new() });
    assert_eq!(state.index(), 0);
    assert!(state.current().is_none());
}

#[test]
fn empty_deck_ignores_navigation() {
    let state = step(loaded(0), DeckIntent::Next);
    let state = step(state, DeckIntent::Prev);
    let state = step(state, DeckIntent::ToggleReveal);
    assert_eq!(state.index(), 0);
    assert!(!state.revealed());
    assert_eq!(state.position(), None);
}

#[test]
fn words_have_nothing_to_reveal() {
    let state: DeckState<WordCard> = DeckReducer::<WordCard>::reduce(
        DeckState::default(),
        DeckIntent::Loaded {
            items: vec![WordCard::default()],
        },
    );
    let state = DeckReducer::<WordCard>::reduce(state, DeckIntent::ToggleReveal);
    assert!(!state.revealed());
}
