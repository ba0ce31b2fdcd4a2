//! The runtime engine.
//!
//! [`WaveState`] is the closed numeric state machine; [`Consciousness`] is
//! the mutable aggregate the instruction effects touch; [`Vm`] owns one of
//! each and replays pulse timelines through them.

mod consciousness;
mod error;
mod state;
mod trace;
mod vm;

#[cfg(test)]
mod state_tests;

pub use consciousness::Consciousness;
pub use error::RuntimeError;
pub use state::WaveState;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::Vm;
