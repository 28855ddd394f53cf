//! Error type for machine setup and symbol resolution.

use thiserror::Error;

/// Errors raised by the slot machine core.
///
/// Configuration variants are fatal at startup. [`SlotError::UnresolvedSymbol`]
/// is an invariant violation that the spin controller recovers from locally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotError {
    #[error("symbol table is empty")]
    EmptySymbolTable,

    #[error("machine needs exactly {expected} reels, got {got}")]
    ReelCount { expected: usize, got: usize },

    #[error("bet must be greater than zero")]
    ZeroBet,

    #[error("invalid spin timing: {0}")]
    InvalidTiming(&'static str),

    #[error("reel {reel} has no slot near the center line")]
    UnresolvedSymbol { reel: usize },
}
