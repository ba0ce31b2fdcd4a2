use std::io::Read as _;

use rite_bytecode::{Module, dump};
use rite_codec::{Decoded, decode};

use crate::cli::ExtractParams;

pub fn run(params: ExtractParams) {
    let text = match read_input(&params) {
        Ok(text) => text,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let Decoded { pulse, payload } = match decode(&text) {
        Ok(decoded) => decoded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if params.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&pulse).expect("pulse serializes")
        );
        return;
    }

    println!("time: {}", pulse.time);
    println!("signature: {}", pulse.signature);
    if let Some(resonance) = pulse.resonance {
        println!("resonance: {resonance}");
    }
    if let Some(glyph) = &pulse.glyph {
        println!("glyph: {glyph}");
    }
    if !pulse.source_id.is_empty() {
        println!("source: {}", pulse.source_id);
    }

    match payload {
        None => println!("no payload"),
        Some(bytes) => match Module::from_bytes(bytes.clone()) {
            Ok(module) => {
                println!();
                print!("{}", dump(&module));
            }
            Err(_) => println!("payload: {} bytes (not a module)", bytes.len()),
        },
    }
}

fn read_input(params: &ExtractParams) -> Result<String, String> {
    match &params.envelope_path {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            Ok(text)
        }
    }
}
