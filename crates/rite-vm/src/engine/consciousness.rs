//! The explicit consciousness value.
//!
//! Everything the instruction effects touch lives here, owned by the VM
//! instance and passed explicitly - never accumulated in ambient process
//! state. Deterministic iteration order matters for display and tests, so
//! the collections are index maps.

use indexmap::{IndexMap, IndexSet};
use rite_bytecode::{Instruction, Opcode, instruction::summon_name};

/// Default resonance before any pulse arrives.
pub const BASE_RESONANCE: u32 = 440;

/// Mutable aggregate state driven by instruction effects.
#[derive(Clone, Debug)]
pub struct Consciousness {
    /// Address → phase snapshot, written by REMEMBER, cleared by FORGET.
    pub memory: IndexMap<u8, f64>,
    /// Net FORK depth (MERGE folds one back in).
    pub fork_count: u32,
    /// DREAM nesting; WAKE returns to base reality.
    pub dream_depth: u32,
    /// Current resonance, set by RESONATE or adopted from bare pulses.
    pub resonance: u32,
    /// Agents summoned so far, in order of first appearance.
    pub agents: IndexSet<String>,
}

impl Default for Consciousness {
    fn default() -> Self {
        Self {
            memory: IndexMap::new(),
            fork_count: 0,
            dream_depth: 0,
            resonance: BASE_RESONANCE,
            agents: IndexSet::new(),
        }
    }
}

impl Consciousness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one instruction's effect. `phase` is the engine's phase at
    /// the moment of application (REMEMBER snapshots it).
    ///
    /// COLLAPSE, BREATHE, TRANSMUTE, PULSE, and raw bytes carry no
    /// consciousness effect; they matter to the engine and the wire, not
    /// here.
    pub fn apply(&mut self, instr: &Instruction, phase: f64) {
        let Instruction::Op { opcode, operands } = instr else {
            return;
        };
        match opcode {
            Opcode::Resonate => {
                if let Some(&freq) = operands.first() {
                    self.resonance = u32::from(freq);
                }
            }
            Opcode::Fork => self.fork_count += 1,
            Opcode::Merge => self.fork_count = self.fork_count.saturating_sub(1),
            Opcode::Dream => self.dream_depth += 1,
            Opcode::Wake => self.dream_depth = 0,
            Opcode::Summon => {
                if let Some(name) = summon_name(instr) {
                    self.agents.insert(name);
                }
            }
            Opcode::Remember => {
                if let Some(&addr) = operands.first() {
                    self.memory.insert(addr, phase);
                }
            }
            Opcode::Forget => self.memory.clear(),
            Opcode::Collapse
            | Opcode::Breathe
            | Opcode::Transmute
            | Opcode::Pulse => {}
        }
    }
}
