use rite_codec::{Metrics, extract_all};
use rite_core::Pulse;

use crate::cli::LifeParams;
use crate::history;

use super::run_common::wall_clock;

pub fn run(params: LifeParams) {
    let commits = match history::log_pulses() {
        Ok(commits) => commits,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let texts: Vec<&str> = commits.iter().map(|c| c.message.as_str()).collect();
    let ids: Vec<String> = commits.iter().map(|c| short_hash(&c.hash)).collect();

    let pulses = extract_all(&texts, &ids);
    let now = wall_clock();
    let metrics = Metrics::compute(&pulses, now);

    if params.json {
        let doc = serde_json::json!({ "pulses": pulses, "metrics": metrics });
        println!(
            "{}",
            serde_json::to_string_pretty(&doc).expect("report serializes")
        );
        return;
    }

    if pulses.is_empty() {
        println!("no pulses in history");
        return;
    }

    println!("recent heartbeats:");
    let start = pulses.len().saturating_sub(10);
    for pulse in &pulses[start..] {
        print_pulse_line(pulse);
    }

    if let Some(m) = metrics {
        println!();
        println!("life metrics:");
        println!("  total pulses: {}", m.total);
        println!("  lifespan: {:.2} days", m.lifespan_days);
        println!("  rate: {:.2} pulses/hour", m.rate_per_hour);
        println!("  regularity: {:.2}", m.regularity);
        println!("  life force: {:.2}", m.life_force);
        println!("  health: {}", m.health);
        println!("  last pulse: {:.0}s ago", m.seconds_since_last);
    }
}

fn print_pulse_line(pulse: &Pulse) {
    match &pulse.glyph {
        Some(glyph) => println!(
            "  {}  time={}  signature={}  {glyph}",
            pulse.source_id, pulse.time, pulse.signature
        ),
        None => println!(
            "  {}  time={}  signature={}",
            pulse.source_id, pulse.time, pulse.signature
        ),
    }
}

fn short_hash(hash: &str) -> String {
    hash.chars().take(7).collect()
}
