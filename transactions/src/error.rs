use thiserror::Error;

use crate::kind::TransactionKind;

/// Errors raised while encoding or decoding transaction payloads.
///
/// `UnexpectedEnd`, `InvalidDirection` and `InvalidVote` are format errors:
/// the bytes or text are malformed. `Overflow` is distinct because the input
/// is well formed but cannot be represented on the wire.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("unexpected end of buffer: need {needed} bytes, {remaining} remaining")]
    UnexpectedEnd { needed: usize, remaining: usize },

    #[error("invalid vote direction byte: {0:#04x}")]
    InvalidDirection(u8),

    #[error("invalid vote: {0}")]
    InvalidVote(String),

    #[error("too many votes: {count} > {max}")]
    Overflow { count: usize, max: usize },

    #[error("write of {needed} bytes exceeds buffer limit, {available} available")]
    BufferFull { needed: usize, available: usize },

    #[error("no codec registered for transaction kind {0}")]
    UnknownKind(TransactionKind),

    #[error("payload of kind {found} cannot be encoded as {expected}")]
    KindMismatch {
        expected: TransactionKind,
        found: TransactionKind,
    },
}

impl CodecError {
    /// Whether the input was malformed, as opposed to unrepresentable or
    /// unroutable.
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedEnd { .. } | Self::InvalidDirection(_) | Self::InvalidVote(_)
        )
    }
}
