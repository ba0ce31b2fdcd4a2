//! Tracing for timeline execution.
//!
//! The tracer is a zero-cost seam: [`NoopTracer`]'s methods are empty
//! inline functions the compiler removes, while [`PrintTracer`] narrates
//! the run. Tracing-only state stays in the tracer, never in the engine.

use rite_core::Pulse;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// One line per pulse.
    #[default]
    Default,
    /// Per-pulse amplitude readout as well.
    Verbose,
}

/// Instrumentation points for timeline execution.
pub trait Tracer {
    /// A pulse is about to be ingested.
    fn trace_pulse(&mut self, pulse: &Pulse);

    /// A dispatch result is about to be absorbed.
    fn trace_absorb(&mut self, value: i64);

    /// A bare heartbeat (no payload) adopted a resonance.
    fn trace_heartbeat(&mut self, resonance: Option<u32>);

    /// Evolution finished; the amplitudes after renormalization.
    fn trace_evolve(&mut self, amplitudes: (f64, f64));

    /// The state collapsed to an outcome.
    fn trace_collapse(&mut self, outcome: u8);
}

/// Tracer that does nothing; optimizes away entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_pulse(&mut self, _pulse: &Pulse) {}
    #[inline(always)]
    fn trace_absorb(&mut self, _value: i64) {}
    #[inline(always)]
    fn trace_heartbeat(&mut self, _resonance: Option<u32>) {}
    #[inline(always)]
    fn trace_evolve(&mut self, _amplitudes: (f64, f64)) {}
    #[inline(always)]
    fn trace_collapse(&mut self, _outcome: u8) {}
}

/// Tracer that narrates the run to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintTracer {
    pub verbosity: Verbosity,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Tracer for PrintTracer {
    fn trace_pulse(&mut self, pulse: &Pulse) {
        println!("pulse {} @ time={}", pulse.signature, pulse.time);
    }

    fn trace_absorb(&mut self, value: i64) {
        println!("  absorb {value}");
    }

    fn trace_heartbeat(&mut self, resonance: Option<u32>) {
        match resonance {
            Some(r) => println!("  heartbeat resonance={r}"),
            None => println!("  heartbeat"),
        }
    }

    fn trace_evolve(&mut self, (a0, a1): (f64, f64)) {
        if self.verbosity == Verbosity::Verbose {
            println!("  state = {a0:.3}|0> + {a1:.3}|1>");
        }
    }

    fn trace_collapse(&mut self, outcome: u8) {
        println!("collapsed to |{outcome}>");
    }
}
