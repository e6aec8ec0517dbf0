//! Validation gate: consult the registry before running normal rules.

use strata_types::{BlockRecord, TransactionRecord};

use crate::registry::{
    is_block_exception, is_transaction_exception, is_transaction_exception_in_block,
};
use crate::ExceptionConfig;

/// Outcome of a gated validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The record is grandfathered; normal rules were not run.
    Exception,
    /// Normal rules ran and accepted the record.
    Validated,
}

/// Accept `block` as an exception, or run `rules` on it.
pub fn check_block<E, F>(block: &BlockRecord, config: &ExceptionConfig, rules: F) -> Result<Verdict, E>
where
    F: FnOnce(&BlockRecord) -> Result<(), E>,
{
    if is_block_exception(block, config) {
        tracing::debug!(id = %block.id, "skipping validation for exception block");
        return Ok(Verdict::Exception);
    }
    rules(block)?;
    Ok(Verdict::Validated)
}

/// Accept `tx` as an exception, or run `rules` on it.
pub fn check_transaction<E, F>(
    tx: &TransactionRecord,
    config: &ExceptionConfig,
    rules: F,
) -> Result<Verdict, E>
where
    F: FnOnce(&TransactionRecord) -> Result<(), E>,
{
    if is_transaction_exception(tx, config) {
        tracing::debug!(id = %tx.id, "skipping validation for exception transaction");
        return Ok(Verdict::Exception);
    }
    rules(tx)?;
    Ok(Verdict::Validated)
}

/// Accept `tx`, carried by `block`, as an exception, or run `rules` on it.
///
/// Legacy transaction ids can only be grandfathered through this path.
pub fn check_transaction_in_block<E, F>(
    tx: &TransactionRecord,
    block: &BlockRecord,
    config: &ExceptionConfig,
    rules: F,
) -> Result<Verdict, E>
where
    F: FnOnce(&TransactionRecord) -> Result<(), E>,
{
    if is_transaction_exception_in_block(tx, block, config) {
        tracing::debug!(id = %tx.id, block = %block.id, "skipping validation for exception transaction");
        return Ok(Verdict::Exception);
    }
    rules(tx)?;
    Ok(Verdict::Validated)
}
