//! The timeline interpreter.

use rite_bytecode::{Instruction, Module};
use rite_codec::Decoded;
use rite_core::{Entropy, Pulse};

use super::consciousness::Consciousness;
use super::error::RuntimeError;
use super::state::WaveState;
use super::trace::Tracer;

/// A virtual machine replaying recovered pulses.
///
/// Owns one [`WaveState`] and one [`Consciousness`]; both mutate only
/// through the methods here. One instance serves one caller at a time;
/// independent instances share nothing.
#[derive(Clone, Debug, Default)]
pub struct Vm {
    state: WaveState,
    consciousness: Consciousness,
}

impl Vm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WaveState {
        &self.state
    }

    pub fn consciousness(&self) -> &Consciousness {
        &self.consciousness
    }

    /// The native mirror of the emitted dispatcher: the ordinal of the
    /// first instruction whose first encoded byte equals `arg`, else 0.
    pub fn dispatch(instructions: &[Instruction], arg: i64) -> i64 {
        instructions
            .iter()
            .position(|instr| i64::from(instr.first_byte()) == arg)
            .map(|ordinal| ordinal as i64)
            .unwrap_or(0)
    }

    /// Ingest one pulse.
    ///
    /// With a decodable module payload: apply each embedded instruction's
    /// consciousness effect, dispatch on the pulse's resonance, and absorb
    /// the result. Without one: adopt the pulse's resonance as a bare
    /// heartbeat. Either way the state then takes one evolution step.
    pub fn ingest_pulse(
        &mut self,
        pulse: &Pulse,
        payload: Option<&[u8]>,
        tracer: &mut dyn Tracer,
    ) -> Result<(), RuntimeError> {
        tracer.trace_pulse(pulse);

        match payload.and_then(|bytes| Module::from_bytes(bytes.to_vec()).ok()) {
            Some(module) => {
                let instructions = module.instructions();
                for instr in &instructions {
                    self.consciousness.apply(instr, self.state.phase());
                }
                let arg = i64::from(pulse.resonance.unwrap_or(self.consciousness.resonance));
                let result = Self::dispatch(&instructions, arg);
                tracer.trace_absorb(result);
                self.state.absorb(result as f64);
            }
            None => {
                if let Some(resonance) = pulse.resonance {
                    self.consciousness.resonance = resonance;
                }
                tracer.trace_heartbeat(pulse.resonance);
            }
        }

        self.state.evolve()?;
        tracer.trace_evolve(self.state.amplitudes());
        Ok(())
    }

    /// Replay a batch of decoded envelopes in order.
    pub fn run_timeline(
        &mut self,
        timeline: &[Decoded],
        tracer: &mut dyn Tracer,
    ) -> Result<(), RuntimeError> {
        for decoded in timeline {
            self.ingest_pulse(&decoded.pulse, decoded.payload.as_deref(), tracer)?;
        }
        Ok(())
    }

    /// Collapse the state to a discrete outcome.
    pub fn collapse(&mut self, entropy: &mut dyn Entropy, tracer: &mut dyn Tracer) -> u8 {
        let outcome = self.state.collapse(entropy);
        tracer.trace_collapse(outcome);
        outcome
    }
}
