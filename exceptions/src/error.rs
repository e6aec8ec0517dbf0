use strata_types::{IdFormat, NetworkId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse exception config: {0}")]
    Parse(String),

    #[error("id {id:?} in exceptions.{table} is not a {} id", .expected.as_str())]
    InvalidId {
        table: &'static str,
        id: String,
        expected: IdFormat,
    },

    #[error("{network} section declares pubKeyHash {found}, expected {expected}")]
    NetworkMismatch {
        network: NetworkId,
        expected: u8,
        found: u8,
    },
}
