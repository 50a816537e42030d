//! Engine tests through the public driver-facing API

use tetris_core::core::{GameState, TickResult};
use tetris_core::types::{GameAction, GameConfig, Phase, BOARD_WIDTH};

fn started(seed: u32) -> GameState {
    let mut state = GameState::new(seed);
    state.start();
    state
}

fn piece_cells(state: &GameState) -> [[i8; 2]; 4] {
    state
        .snapshot()
        .piece
        .expect("active piece")
        .cells
}

#[test]
fn test_start_transitions_ready_to_falling() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::Ready);
    assert!(state.snapshot().piece.is_none());

    state.start();
    assert_eq!(state.phase(), Phase::Falling);
    assert!(state.snapshot().piece.is_some());

    // Starting twice is a no-op
    let cells = piece_cells(&state);
    state.start();
    assert_eq!(piece_cells(&state), cells);
}

#[test]
fn test_spawned_piece_is_inside_top_rows() {
    for seed in [1, 2, 3, 4, 5, 6, 7, 8] {
        let state = started(seed);
        for [x, y] in piece_cells(&state) {
            assert!((0..BOARD_WIDTH as i8).contains(&x));
            assert!((0..2).contains(&y));
        }
    }
}

#[test]
fn test_gravity_triggers_on_accumulated_threshold() {
    let mut state = started(12345);
    let before = piece_cells(&state);

    // 399ms is below the 400ms threshold: no movement
    assert_eq!(state.tick(399), TickResult::default());
    assert_eq!(piece_cells(&state), before);

    // 2ms more crosses the threshold: exactly one downward step
    assert_eq!(state.tick(2), TickResult::default());
    let after = piece_cells(&state);
    for (a, b) in before.iter().zip(after.iter()) {
        assert_eq!(a[0], b[0]);
        assert_eq!(a[1] + 1, b[1]);
    }
}

#[test]
fn test_one_gravity_step_per_tick_even_for_large_elapsed() {
    let mut state = started(12345);
    let y0 = piece_cells(&state)[0][1];

    state.tick(5_000);
    assert_eq!(piece_cells(&state)[0][1], y0 + 1);
}

#[test]
fn test_first_input_is_honored_then_cooldown_gates() {
    let mut state = started(12345);
    let x0 = piece_cells(&state)[0][0];

    // Fresh spawn: the move-repeat timer starts ready
    assert!(state.apply_input(GameAction::Right));
    assert_eq!(piece_cells(&state)[0][0], x0 + 1);

    // Immediately repeated input is rejected and mutates nothing
    assert!(!state.apply_input(GameAction::Right));
    assert_eq!(piece_cells(&state)[0][0], x0 + 1);

    // After the cooldown elapses the input is honored again
    state.tick(150);
    assert!(state.apply_input(GameAction::Right));
    assert_eq!(piece_cells(&state)[0][0], x0 + 2);
}

#[test]
fn test_rejected_input_does_not_reset_cooldown() {
    let mut state = started(12345);

    // Exhaust the cooldown with a successful move
    assert!(state.apply_input(GameAction::Down));
    // A rejected action (cooldown active) leaves the timer running
    assert!(!state.apply_input(GameAction::Down));
    state.tick(150);
    // The timer kept accumulating across the rejection
    assert!(state.apply_input(GameAction::Down));
}

#[test]
fn test_walking_right_stops_at_the_wall() {
    let mut state = started(12345);

    let mut rejected = false;
    for _ in 0..BOARD_WIDTH as usize + 5 {
        state.tick(150);
        if !state.apply_input(GameAction::Right) {
            rejected = true;
            break;
        }
    }
    assert!(rejected, "right moves must eventually hit the wall");

    let max_x = piece_cells(&state).iter().map(|c| c[0]).max().unwrap();
    assert_eq!(max_x, BOARD_WIDTH as i8 - 1);
}

#[test]
fn test_rotate_succeeds_on_open_board() {
    let mut state = started(12345);
    assert!(state.apply_input(GameAction::Rotate));

    // Rotated cells stay legal
    for [x, y] in piece_cells(&state) {
        assert!((0..BOARD_WIDTH as i8).contains(&x));
        assert!(y >= 0);
    }
}

#[test]
fn test_down_moves_exactly_one_row() {
    let mut state = started(12345);
    let before = piece_cells(&state);

    assert!(state.apply_input(GameAction::Down));
    let after = piece_cells(&state);
    for (a, b) in before.iter().zip(after.iter()) {
        assert_eq!(a[0], b[0]);
        assert_eq!(a[1] + 1, b[1]);
    }
}

#[test]
fn test_none_action_is_a_no_op() {
    let mut state = started(12345);
    let before = piece_cells(&state);
    assert!(!state.apply_input(GameAction::None));
    assert_eq!(piece_cells(&state), before);
}

#[test]
fn test_same_seed_replays_identically() {
    let mut a = started(2024);
    let mut b = started(2024);

    for step in 0..500 {
        let action = match step % 7 {
            0 => GameAction::Left,
            3 => GameAction::Rotate,
            5 => GameAction::Right,
            _ => GameAction::None,
        };
        assert_eq!(a.apply_input(action), b.apply_input(action));
        assert_eq!(a.tick(100), b.tick(100));
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.score(), b.score());
    }
}

#[test]
fn test_untouched_game_eventually_ends() {
    let mut state = started(99);
    let mut last_score = 0;
    let mut over = false;

    for _ in 0..100_000 {
        let result = state.tick(400);
        // Score never decreases
        assert!(state.score() >= last_score);
        last_score = state.score();
        if result.game_over {
            over = true;
            break;
        }
    }
    assert!(over, "stacked pieces must eventually block the spawn point");
    assert!(state.game_over());

    // Terminal state: tick and input are inert
    let snapshot = state.snapshot();
    assert!(!state.apply_input(GameAction::Left));
    let result = state.tick(400);
    assert!(result.game_over);
    assert!(!result.spawned_new_piece);
    assert_eq!(state.snapshot(), snapshot);
}

#[test]
fn test_custom_config_changes_gravity_threshold() {
    let config = GameConfig {
        fall_interval_ms: 100,
        move_repeat_ms: 150,
        score_per_row: 100,
    };
    let mut state = GameState::new_with_config(7, config);
    state.start();
    let y0 = piece_cells(&state)[0][1];

    assert_eq!(state.tick(99), TickResult::default());
    assert_eq!(piece_cells(&state)[0][1], y0);
    state.tick(1);
    assert_eq!(piece_cells(&state)[0][1], y0 + 1);
}

#[test]
fn test_seed_accessor_tracks_draws() {
    let fresh = GameState::new(123);
    let mut advanced = GameState::new(123);
    advanced.start();
    // Spawning consumed one draw from the injected RNG
    assert_ne!(fresh.seed(), advanced.seed());
}
