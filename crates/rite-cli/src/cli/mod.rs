//! CLI structure: command tree and argument extraction.

mod args;
mod commands;
mod dispatch;

pub use commands::build_cli;
pub use dispatch::{
    CompileParams, DumpParams, ExtractParams, LifeParams, PulseParams, RunParams,
};
