//! Binary module format and instruction set for Rite.
//!
//! This crate contains:
//! - The fixed 12-entry opcode table and instruction stream codec
//! - The module container format (header, typed sections) and its reader
//! - A human-readable module dump for inspection

pub mod dump;
pub mod instruction;
pub mod module;
pub mod opcode;

pub use dump::dump;
pub use instruction::{Instruction, decode_stream, encode_stream};
pub use module::{
    EXPORT_DISPATCH, EXPORT_LEVEL, EXPORT_MEMORY, HEADER_LEN, LEVEL_CONSTANT, MAGIC, Module,
    ModuleError, Section, VERSION, section,
};
pub use opcode::Opcode;
