//! Core data structures for Rite.
//!
//! This crate contains:
//! - [`Pulse`], the unit of recovered heartbeat metadata
//! - Stable hashing for content-derived signatures
//! - Injectable entropy sources for deterministic sampling

pub mod entropy;
pub mod pulse;
pub mod stable_hash;

pub use entropy::{Entropy, Stream};
pub use pulse::Pulse;
pub use stable_hash::{fnv1a64, fnv1a64_mix};
