//! Runtime errors.

/// Errors raised by the state engine.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuntimeError {
    /// The amplitude norm degenerated to zero during evolution. The
    /// rotation preserves the norm, so this can only mean the state was
    /// corrupted - it is a bug, never recovered from.
    #[error("amplitude norm degenerated to zero during evolution")]
    DegenerateNorm,
}
