//! Param structs populated from clap matches, one per command.

use std::path::PathBuf;

use clap::ArgMatches;

pub struct CompileParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub program: Option<String>,
    pub output: Option<PathBuf>,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            program: m.get_one::<String>("program").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
        }
    }
}

pub struct DumpParams {
    pub module_path: PathBuf,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            module_path: m
                .get_one::<PathBuf>("module_path")
                .expect("module_path is required")
                .clone(),
        }
    }
}

pub struct PulseParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub program: Option<String>,
    pub intent: Option<String>,
    pub glyph: Option<String>,
    pub seed: Option<u64>,
    pub commit: bool,
}

impl PulseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            program: m.get_one::<String>("program").cloned(),
            intent: m.get_one::<String>("intent").cloned(),
            glyph: m.get_one::<String>("glyph").cloned(),
            seed: m.get_one::<u64>("seed").copied(),
            commit: m.get_flag("commit"),
        }
    }
}

pub struct ExtractParams {
    pub envelope_path: Option<PathBuf>,
    pub json: bool,
}

impl ExtractParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            envelope_path: m.get_one::<PathBuf>("envelope_path").cloned(),
            json: m.get_flag("json"),
        }
    }
}

pub struct LifeParams {
    pub json: bool,
}

impl LifeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
        }
    }
}

pub struct RunParams {
    pub limit: Option<usize>,
    pub collapse: bool,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            limit: m.get_one::<usize>("limit").copied(),
            collapse: m.get_flag("collapse"),
            seed: m.get_one::<u64>("seed").copied(),
            verbose: m.get_flag("verbose"),
        }
    }
}
