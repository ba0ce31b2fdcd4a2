pub mod compile;
pub mod dump;
pub mod extract;
pub mod life;
pub mod pulse;
pub mod run;
pub mod run_common;
pub mod source_loader;
