//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` composed into commands, so a flag
//! means the same thing everywhere it appears.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Source file (positional).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("Source file to compile")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline source text")
}

/// Built-in program by name (--program).
pub fn program_arg() -> Arg {
    Arg::new("program")
        .short('p')
        .long("program")
        .value_name("NAME")
        .help("Built-in program (awakening, fork-dream, summoning, memory-loop)")
}

/// Output path (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Write module bytes to this path (default: print a dump)")
}

/// Module file (positional).
pub fn module_path_arg() -> Arg {
    Arg::new("module_path")
        .value_name("MODULE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Compiled module file")
}

/// Envelope text file (positional; stdin when omitted).
pub fn envelope_path_arg() -> Arg {
    Arg::new("envelope_path")
        .value_name("ENVELOPE")
        .value_parser(value_parser!(PathBuf))
        .help("Envelope text file (reads stdin when omitted)")
}

/// Entropy seed (--seed).
pub fn seed_arg() -> Arg {
    Arg::new("seed")
        .long("seed")
        .value_name("N")
        .value_parser(value_parser!(u64))
        .help("Seed for the entropy stream (random otherwise)")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Emit JSON instead of the text view")
}

/// Verbose trace (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Trace amplitudes after every pulse")
}
