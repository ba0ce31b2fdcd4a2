//! Binary module emission.

mod emitter;

pub use emitter::emit;
