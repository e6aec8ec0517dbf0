//! Chain exception registry.
//!
//! An immutable ledger's early history contains records that break rules
//! tightened later. Each network hard-codes the ids of those records, and
//! every node must reach the same accept/reject decision from the same table.
//!
//! - [`config`]: the validated, read-only exception snapshot
//! - [`catalog`]: per-network snapshots loaded from one file
//! - [`registry`]: the exception predicates
//! - [`gate`]: run the registry before normal validation rules

pub mod catalog;
pub mod config;
pub mod error;
pub mod gate;
pub mod registry;

pub use catalog::ExceptionCatalog;
pub use config::{ExceptionConfig, ExceptionTables, NetworkParams};
pub use error::ConfigError;
pub use gate::{check_block, check_transaction, check_transaction_in_block, Verdict};
pub use registry::{
    is_block_exception, is_exception, is_transaction_exception, is_transaction_exception_in_block,
    Record,
};
