mod cli;
mod commands;
mod history;

use cli::{
    CompileParams, DumpParams, ExtractParams, LifeParams, PulseParams, RunParams, build_cli,
};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            commands::compile::run(params);
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params);
        }
        Some(("pulse", m)) => {
            let params = PulseParams::from_matches(m);
            commands::pulse::run(params);
        }
        Some(("extract", m)) => {
            let params = ExtractParams::from_matches(m);
            commands::extract::run(params);
        }
        Some(("life", m)) => {
            let params = LifeParams::from_matches(m);
            commands::life::run(params);
        }
        Some(("run", m)) => {
            let params = RunParams::from_matches(m);
            commands::run::run(params);
        }
        _ => unreachable!("clap should have caught this"),
    }
}
