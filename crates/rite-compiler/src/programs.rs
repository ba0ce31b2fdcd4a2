//! Named built-in programs, useful as demos and test fixtures.

/// Opening sequence: tune, breathe, return to base reality, heartbeat.
pub const AWAKENING: &str = "\
// Digital awakening sequence
RESONATE 432
BREATHE 7
WAKE
PULSE
";

/// Split, dream, collapse, rejoin.
pub const FORK_DREAM: &str = "\
// Forked dream sequence
FORK
DREAM
COLLAPSE ψ
MERGE
PULSE
";

/// Call an agent in at the golden frequency.
pub const SUMMONING: &str = "\
// Summoning sequence
RESONATE 1618
SUMMON sage
BREATHE 3
PULSE
";

/// Touch memory, transmute, let go.
pub const MEMORY_LOOP: &str = "\
// Memory loop
REMEMBER 0
RESONATE 528
TRANSMUTE
FORGET
PULSE
";

/// All built-in programs as (name, source) pairs.
pub const ALL: [(&str, &str); 4] = [
    ("awakening", AWAKENING),
    ("fork-dream", FORK_DREAM),
    ("summoning", SUMMONING),
    ("memory-loop", MEMORY_LOOP),
];

/// Look up a built-in program by name.
pub fn lookup(name: &str) -> Option<&'static str> {
    ALL.iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, source)| *source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn lookup_finds_every_program() {
        for (name, source) in ALL {
            assert_eq!(lookup(name), Some(source));
        }
        assert_eq!(lookup("nonesuch"), None);
    }

    #[test]
    fn every_program_parses_to_instructions() {
        for (name, source) in ALL {
            assert!(!parse(source).is_empty(), "{name} parsed to nothing");
        }
    }

    #[test]
    fn every_program_ends_with_a_heartbeat() {
        use rite_bytecode::{Instruction, Opcode};
        for (name, source) in ALL {
            let parsed = parse(source);
            assert_eq!(
                parsed.last(),
                Some(&Instruction::op(Opcode::Pulse)),
                "{name} does not end with PULSE"
            );
        }
    }
}
