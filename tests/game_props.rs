use proptest::prelude::*;
use tictactoe::{calculate_winner, GameEvent, GameState, Mark, CELL_COUNT};

fn event_strategy() -> impl Strategy<Value = GameEvent> {
    prop_oneof![
        3 => (0..CELL_COUNT).prop_map(GameEvent::CellClick),
        1 => (0..CELL_COUNT + 1).prop_map(GameEvent::HistoryJump),
    ]
}

/// Apply an event, clamping jumps into the recorded history.
fn step(state: &GameState, event: GameEvent) -> GameState {
    let event = match event {
        GameEvent::HistoryJump(s) => GameEvent::HistoryJump(s % state.history().len()),
        other => other,
    };
    state.apply(event).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Structural invariants hold after any sequence of clicks and jumps.
    #[test]
    fn invariants_hold(events in prop::collection::vec(event_strategy(), 0..40)) {
        let mut state = GameState::new();
        for event in events {
            state = step(&state, event);

            prop_assert!(state.step_number() < state.history().len());
            prop_assert!(state.history().len() <= CELL_COUNT + 1);
            prop_assert_eq!(state.next_player(), Mark::for_step(state.step_number()));
            prop_assert!(state.history()[0].is_empty());
            for (i, board) in state.history().iter().enumerate() {
                prop_assert_eq!(board.mark_count(), i);
            }
            // no snapshot follows a finished game
            let last = state.history().len() - 1;
            for board in &state.history()[..last] {
                prop_assert_eq!(calculate_winner(board), None);
            }
        }
    }

    /// Jumping only moves the step pointer; every recorded snapshot is
    /// reachable and the history itself is left as it was.
    #[test]
    fn jumps_keep_history(events in prop::collection::vec(event_strategy(), 1..30)) {
        let mut state = GameState::new();
        for event in events {
            state = step(&state, event);
        }
        for s in 0..state.history().len() {
            let jumped = state.jump_to(s).unwrap();
            prop_assert_eq!(jumped.history(), state.history());
            prop_assert_eq!(jumped.current(), &state.history()[s]);
            prop_assert_eq!(jumped.next_player(), Mark::for_step(s));
        }
    }

    /// A click either extends the displayed prefix by one snapshot or
    /// leaves the state unchanged.
    #[test]
    fn click_extends_prefix_or_is_ignored(
        events in prop::collection::vec(event_strategy(), 0..30),
        cell in 0..CELL_COUNT,
    ) {
        let mut state = GameState::new();
        for event in events {
            state = step(&state, event);
        }
        let next = state.apply_move(cell).unwrap();
        if next == state {
            prop_assert!(
                state.winner().is_some() || !state.current().cell(cell).unwrap().is_empty()
            );
        } else {
            let k = state.step_number();
            prop_assert_eq!(next.history().len(), k + 2);
            prop_assert_eq!(&next.history()[..=k], &state.history()[..=k]);
            prop_assert_eq!(next.current().cell(cell).unwrap().mark(), Some(state.next_player()));
        }
    }
}
