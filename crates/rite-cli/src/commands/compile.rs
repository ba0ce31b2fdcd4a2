use rite_bytecode::{Module, dump};

use crate::cli::CompileParams;

use super::source_loader::load_source;

pub fn run(params: CompileParams) {
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

    match params.output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, &bytes) {
                eprintln!("error: cannot write {}: {e}", path.display());
                std::process::exit(1);
            }
            println!("wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let module = Module::from_bytes(bytes).expect("emitted module must load");
            print!("{}", dump(&module));
        }
    }
}
