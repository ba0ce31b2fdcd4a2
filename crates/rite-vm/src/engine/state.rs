//! The normalized two-amplitude state.

use std::f64::consts::FRAC_PI_2;

use rite_core::Entropy;

use super::error::RuntimeError;

/// Rotation coefficients for one evolution step.
const ROT_COS: f64 = 0.99;
const ROT_SIN: f64 = 0.14;

/// A norm below this is a corrupted state, not drift.
const MIN_NORM: f64 = 1e-12;

/// A two-amplitude superposed state with a phase accumulator.
///
/// While un-collapsed, `amp0² + amp1² == 1` within floating tolerance.
/// Collapse is terminal: the pair becomes one-hot and every further
/// mutation is a no-op. One instance serves one caller; independent
/// instances are fully independent.
#[derive(Clone, Debug)]
pub struct WaveState {
    amp0: f64,
    amp1: f64,
    phase: f64,
    collapsed: bool,
}

impl Default for WaveState {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveState {
    /// Ground state: (1, 0), zero phase, un-collapsed.
    pub fn new() -> Self {
        Self {
            amp0: 1.0,
            amp1: 0.0,
            phase: 0.0,
            collapsed: false,
        }
    }

    pub fn amplitudes(&self) -> (f64, f64) {
        (self.amp0, self.amp1)
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Re-point the superposition from an absorbed numeric result and
    /// accumulate its phase. Frozen (a no-op) once collapsed.
    pub fn absorb(&mut self, value: f64) {
        if self.collapsed {
            return;
        }
        let normalized = value.sin().abs();
        self.amp0 = (normalized * FRAC_PI_2).cos();
        self.amp1 = (normalized * FRAC_PI_2).sin();
        self.phase += value;
    }

    /// One step of the fixed rotation, then renormalization against
    /// numeric drift. A no-op once collapsed.
    pub fn evolve(&mut self) -> Result<(), RuntimeError> {
        if self.collapsed {
            return Ok(());
        }
        let (a0, a1) = (self.amp0, self.amp1);
        self.amp0 = ROT_COS * a0 - ROT_SIN * a1;
        self.amp1 = ROT_SIN * a0 + ROT_COS * a1;

        let norm = self.amp0.hypot(self.amp1);
        if norm < MIN_NORM {
            return Err(RuntimeError::DegenerateNorm);
        }
        self.amp0 /= norm;
        self.amp1 /= norm;
        Ok(())
    }

    /// Sample a discrete outcome with probability `amp1²` of reading 1,
    /// then freeze the state one-hot. Idempotent: once collapsed, the
    /// fixed outcome comes back without resampling.
    pub fn collapse(&mut self, entropy: &mut dyn Entropy) -> u8 {
        if self.collapsed {
            return if self.amp1 == 1.0 { 1 } else { 0 };
        }
        let probability = self.amp1 * self.amp1;
        let outcome = if entropy.uniform() < probability { 1 } else { 0 };

        self.collapsed = true;
        self.amp0 = if outcome == 0 { 1.0 } else { 0.0 };
        self.amp1 = if outcome == 1 { 1.0 } else { 0.0 };
        outcome
    }
}
