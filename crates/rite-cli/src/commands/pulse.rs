use rite_codec::Envelope;

use crate::cli::PulseParams;
use crate::history;

use super::run_common::entropy_from;
use super::source_loader::load_source;

pub fn run(params: PulseParams) {
    let source = match load_source(
        params.source_path.as_deref(),
        params.source_text.as_deref(),
        params.program.as_deref(),
    ) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let bytes = rite_compiler::compile(&source);

    let mut envelope = Envelope::new("", &bytes);
    if let Some(intent) = params.intent.as_deref() {
        envelope = envelope.intent(intent);
    }
    if let Some(glyph) = params.glyph.as_deref() {
        envelope = envelope.glyph(glyph);
    }

    let mut entropy = entropy_from(params.seed);
    let text = envelope.render(&mut entropy);

    if params.commit {
        if let Err(e) = history::commit_envelope(&text) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
        println!("pulse committed ({} payload bytes)", bytes.len());
    } else {
        print!("{text}");
    }
}
