//! State engine and timeline interpreter for recovered pulses.
//!
//! This crate owns the normalized two-amplitude state, the explicit
//! consciousness value it rides alongside, and the interpreter that drives
//! both from a recovered pulse timeline.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{
    Consciousness, NoopTracer, PrintTracer, RuntimeError, Tracer, Verbosity, Vm, WaveState,
};
