//! Pulse envelope wire format.
//!
//! An envelope is free-form text carrying three tagged scalar fields
//! (`time`, `signature`, `resonance`), an intent line, and one payload
//! block in a reversible text-safe encoding. Envelopes are designed to
//! survive hostile surroundings - commit messages, emails, logs - so
//! decoding scans for fields anywhere in the text and treats everything
//! else as noise.
//!
//! - `scan` - the tag scanner (a small grammar, not ad hoc patterns)
//! - `payload` - the byte ↔ text transport encoding
//! - `envelope` - envelope construction and recovery
//! - `store` - best-effort batch extraction
//! - `metrics` - pure reductions over recovered pulse trains

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod envelope;
pub mod metrics;
pub mod payload;
pub mod scan;
pub mod store;

#[cfg(test)]
mod envelope_tests;

pub use envelope::{Decoded, Envelope, decode, decode_fields, signature_of};
pub use metrics::{Health, Metrics};
pub use payload::{decode_payload, encode_payload};
pub use store::extract_all;

/// Envelope decode error.
///
/// Both variants are recoverable per item: batch extraction skips the
/// offending text and continues.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text carries no recognizable pulse fields (or lacks the
    /// required time/signature pair).
    #[error("no pulse fields found")]
    NoPulse,
    /// A payload block was opened but never closed.
    #[error("payload block is unterminated")]
    Truncated,
    /// The payload block is not valid transport encoding.
    #[error("malformed payload block: {0}")]
    Payload(#[from] base64::DecodeError),
}

/// Result type for envelope decoding.
pub type Result<T> = std::result::Result<T, CodecError>;
