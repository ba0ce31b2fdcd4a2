//! Tests for the two-amplitude state.

use rite_core::{Entropy, Stream};

use super::state::WaveState;

/// Entropy that yields a fixed uniform value forever.
struct FixedUniform(f64);

impl Entropy for FixedUniform {
    fn next_u64(&mut self) -> u64 {
        // Invert the default uniform mapping: value * 2^53, shifted back up.
        ((self.0 * (1u64 << 53) as f64) as u64) << 11
    }
}

fn norm(state: &WaveState) -> f64 {
    let (a0, a1) = state.amplitudes();
    (a0 * a0 + a1 * a1).sqrt()
}

#[test]
fn ground_state() {
    let state = WaveState::new();
    assert_eq!(state.amplitudes(), (1.0, 0.0));
    assert_eq!(state.phase(), 0.0);
    assert!(!state.is_collapsed());
}

#[test]
fn norm_stays_unit_over_long_evolution() {
    let mut state = WaveState::new();
    for _ in 0..10_000 {
        state.evolve().unwrap();
        assert!((norm(&state) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn absorb_repoints_and_accumulates_phase() {
    let mut state = WaveState::new();
    state.absorb(2.0);
    assert!((norm(&state) - 1.0).abs() < 1e-9);
    assert_eq!(state.phase(), 2.0);

    state.absorb(3.5);
    assert_eq!(state.phase(), 5.5);

    // sin(0) = 0: back to the ground orientation.
    state.absorb(0.0);
    let (a0, a1) = state.amplitudes();
    assert!((a0 - 1.0).abs() < 1e-12);
    assert!(a1.abs() < 1e-12);
}

#[test]
fn absorb_then_evolve_keeps_the_invariant() {
    let mut state = WaveState::new();
    for i in 0..100 {
        state.absorb(i as f64 * 0.7);
        state.evolve().unwrap();
        assert!((norm(&state) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn collapse_returns_a_bit_and_fixes_the_pair() {
    let mut state = WaveState::new();
    // Point the state mostly at |1>.
    state.absorb(std::f64::consts::FRAC_PI_2);

    let outcome = state.collapse(&mut Stream::new(99));
    assert!(outcome == 0 || outcome == 1);
    assert!(state.is_collapsed());

    let (a0, a1) = state.amplitudes();
    if outcome == 1 {
        assert_eq!((a0, a1), (0.0, 1.0));
    } else {
        assert_eq!((a0, a1), (1.0, 0.0));
    }
}

#[test]
fn collapse_is_idempotent() {
    let mut state = WaveState::new();
    state.absorb(1.3);

    let first = state.collapse(&mut Stream::new(5));
    // A different entropy source cannot change a fixed outcome.
    let second = state.collapse(&mut Stream::new(77777));
    assert_eq!(first, second);
}

#[test]
fn collapse_outcome_follows_the_excited_probability() {
    // Ground state: p(1) = 0. Any draw reads 0.
    let mut ground = WaveState::new();
    assert_eq!(ground.collapse(&mut FixedUniform(0.0001)), 0);

    // Fully excited: p(1) = 1. Any draw below 1 reads 1.
    let mut excited = WaveState::new();
    excited.absorb(std::f64::consts::FRAC_PI_2); // sin = 1 -> (0, 1)
    assert_eq!(excited.collapse(&mut FixedUniform(0.9999)), 1);
}

#[test]
fn collapsed_state_is_frozen() {
    let mut state = WaveState::new();
    state.collapse(&mut Stream::new(1));
    let before = state.amplitudes();
    let phase = state.phase();

    state.absorb(4.2);
    state.evolve().unwrap();
    assert_eq!(state.amplitudes(), before);
    assert_eq!(state.phase(), phase);
}

#[test]
fn deterministic_collapse_under_a_seeded_stream() {
    let outcome = |seed: u64| {
        let mut state = WaveState::new();
        state.absorb(0.9);
        state.collapse(&mut Stream::new(seed))
    };
    assert_eq!(outcome(12345), outcome(12345));
}
