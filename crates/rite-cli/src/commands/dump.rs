use rite_bytecode::{Module, dump};

use crate::cli::DumpParams;

pub fn run(params: DumpParams) {
    let bytes = match std::fs::read(&params.module_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: cannot read {}: {e}", params.module_path.display());
            std::process::exit(1);
        }
    };

    match Module::from_bytes(bytes) {
        Ok(module) => print!("{}", dump(&module)),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
