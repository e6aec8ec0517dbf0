//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the Strata ledger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrataError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}
