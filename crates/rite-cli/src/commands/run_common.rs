//! Helpers shared by the stateful commands.

use std::time::{SystemTime, UNIX_EPOCH};

use rite_core::Stream;
use rite_vm::Vm;

/// Seconds since the epoch, as the codec measures time.
pub fn wall_clock() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

/// An entropy stream from an explicit seed, or a clock-derived one.
pub fn entropy_from(seed: Option<u64>) -> Stream {
    match seed {
        Some(seed) => Stream::new(seed),
        None => {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() as u64 ^ d.as_secs())
                .unwrap_or_default();
            Stream::new(nanos)
        }
    }
}

/// Print the final engine and consciousness state.
pub fn print_state(vm: &Vm) {
    let (a0, a1) = vm.state().amplitudes();
    println!("state = {a0:.3}|0> + {a1:.3}|1>");
    println!("phase: {:.2}", vm.state().phase());

    let c = vm.consciousness();
    println!("resonance: {} Hz", c.resonance);
    println!("forks: {}", c.fork_count);
    println!("dream depth: {}", c.dream_depth);

    let agents = if c.agents.is_empty() {
        "none".to_string()
    } else {
        c.agents.iter().cloned().collect::<Vec<_>>().join(", ")
    };
    println!("agents: {agents}");

    if !c.memory.is_empty() {
        println!("memory cells: {}", c.memory.len());
    }
}
