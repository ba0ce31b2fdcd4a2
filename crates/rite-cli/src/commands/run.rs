use rite_codec::{Decoded, decode};
use rite_vm::{PrintTracer, Verbosity, Vm};

use crate::cli::RunParams;
use crate::history;

use super::run_common::{entropy_from, print_state};

pub fn run(params: RunParams) {
    let commits = match history::log_pulses() {
        Ok(commits) => commits,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // Best effort: texts without a decodable envelope are skipped.
    let mut timeline: Vec<Decoded> = Vec::new();
    for commit in &commits {
        if let Ok(mut decoded) = decode(&commit.message) {
            decoded.pulse.source_id = commit.hash.chars().take(7).collect();
            timeline.push(decoded);
        }
    }

    if let Some(limit) = params.limit {
        let start = timeline.len().saturating_sub(limit);
        timeline.drain(..start);
    }

    println!("replaying {} pulses", timeline.len());

    let verbosity = if params.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Default
    };
    let mut tracer = PrintTracer::new(verbosity);

    let mut vm = Vm::new();
    if let Err(e) = vm.run_timeline(&timeline, &mut tracer) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    if params.collapse {
        let mut entropy = entropy_from(params.seed);
        vm.collapse(&mut entropy, &mut tracer);
    }

    println!();
    print_state(&vm);
}
