use rand::{rngs::SmallRng, SeedableRng};
use tictactoe::{simulate, SimConfig, CELL_COUNT};

#[test]
fn test_same_seed_same_report() {
    let config = SimConfig::default();
    let a = simulate(&mut SmallRng::seed_from_u64(7), &config);
    let b = simulate(&mut SmallRng::seed_from_u64(7), &config);
    assert_eq!(a, b);
}

#[test]
fn test_report_counts_add_up() {
    for seed in 0..32 {
        let config = SimConfig {
            events: 50,
            jump_probability: 0.3,
        };
        let report = simulate(&mut SmallRng::seed_from_u64(seed), &config);
        assert_eq!(
            report.applied_moves + report.ignored_moves + report.jumps,
            report.events
        );
        assert!(report.step < report.history_len);
        assert!(report.history_len <= CELL_COUNT + 1);
        assert_eq!(report.board.len(), CELL_COUNT);
    }
}

#[test]
fn test_non_finite_jump_probability_disables_jumps() {
    for jump_probability in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let config = SimConfig {
            events: 10,
            jump_probability,
        };
        let report = simulate(&mut SmallRng::seed_from_u64(1), &config);
        assert_eq!(report.jumps, 0);
        assert_eq!(report.applied_moves + report.ignored_moves, 10);
    }
}

#[test]
fn test_out_of_range_jump_probability_is_clamped() {
    let config = SimConfig {
        events: 30,
        jump_probability: 7.5,
    };
    let report = simulate(&mut SmallRng::seed_from_u64(2), &config);
    // the first event is always a click; once history grows every event jumps
    assert_eq!(report.applied_moves, 1);
    assert_eq!(report.jumps, 29);
}

#[test]
fn test_clicks_only_fill_or_finish_the_board() {
    let config = SimConfig {
        events: 200,
        jump_probability: 0.0,
    };
    let report = simulate(&mut SmallRng::seed_from_u64(3), &config);
    assert_eq!(report.jumps, 0);
    assert!(report.winner.is_some() || !report.board.contains('.'));
    assert_eq!(report.step, report.history_len - 1);
}
