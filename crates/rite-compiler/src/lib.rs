//! Compiler for the rite instruction language.
//!
//! This crate provides the compilation pipeline:
//! - `parser` - logos lexer and line parser (source → instructions)
//! - `emit` - binary module emission (instructions → bytes)
//! - `programs` - named built-in example programs
//!
//! Compilation never fails: unknown mnemonics are no-ops, malformed
//! operands fall back to their documented defaults, and every instruction
//! sequence (including the empty one) emits a structurally valid module.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
pub mod parser;
pub mod programs;

pub use emit::emit;
pub use parser::parse;

/// Compile source text straight to module bytes.
pub fn compile(source: &str) -> Vec<u8> {
    emit(&parse(source))
}
