//! The command tree.

use clap::{Arg, ArgAction, Command};

use super::args::{
    envelope_path_arg, json_arg, module_path_arg, output_arg, program_arg, seed_arg,
    source_path_arg, source_text_arg, verbose_arg,
};

pub fn build_cli() -> Command {
    Command::new("rite")
        .about("Compile, pulse, and replay ritual instruction modules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compile")
                .about("Compile source to a binary module")
                .arg(source_path_arg())
                .arg(source_text_arg())
                .arg(program_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("dump")
                .about("Show the sections and instruction stream of a module")
                .arg(module_path_arg()),
        )
        .subcommand(
            Command::new("pulse")
                .about("Wrap a compiled module in a pulse envelope")
                .arg(source_path_arg())
                .arg(source_text_arg())
                .arg(program_arg())
                .arg(seed_arg())
                .arg(
                    Arg::new("intent")
                        .long("intent")
                        .value_name("TEXT")
                        .help("Free-text intent line"),
                )
                .arg(
                    Arg::new("glyph")
                        .long("glyph")
                        .value_name("GLYPH")
                        .help("Glyph decoration for the envelope"),
                )
                .arg(
                    Arg::new("commit")
                        .long("commit")
                        .action(ArgAction::SetTrue)
                        .help("Record the envelope as an empty git commit"),
                ),
        )
        .subcommand(
            Command::new("extract")
                .about("Decode a pulse envelope")
                .arg(envelope_path_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("life")
                .about("Recover every pulse from git history and report metrics")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("run")
                .about("Replay the pulse timeline through the state engine")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_name("N")
                        .value_parser(clap::value_parser!(usize))
                        .help("Replay only the last N pulses"),
                )
                .arg(
                    Arg::new("collapse")
                        .long("collapse")
                        .action(ArgAction::SetTrue)
                        .help("Collapse the state after the replay"),
                )
                .arg(seed_arg())
                .arg(verbose_arg()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn compile_accepts_program_and_output() {
        let m = build_cli()
            .try_get_matches_from(["rite", "compile", "--program", "awakening", "-o", "out.bin"])
            .unwrap();
        let (name, sub) = m.subcommand().unwrap();
        assert_eq!(name, "compile");
        assert_eq!(sub.get_one::<String>("program").unwrap(), "awakening");
    }

    #[test]
    fn run_accepts_seed_and_limit() {
        let m = build_cli()
            .try_get_matches_from(["rite", "run", "--limit", "5", "--seed", "7", "--collapse"])
            .unwrap();
        let (_, sub) = m.subcommand().unwrap();
        assert_eq!(sub.get_one::<usize>("limit"), Some(&5));
        assert_eq!(sub.get_one::<u64>("seed"), Some(&7));
        assert!(sub.get_flag("collapse"));
    }
}
