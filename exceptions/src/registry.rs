//! Exception predicates.
//!
//! All predicates are pure reads of an [`ExceptionConfig`] and fail closed:
//! an unset network or a missing table means "not an exception", so the
//! record goes through normal validation.

use strata_types::{BlockRecord, IdFormat, RecordId, TransactionRecord};
use tracing::debug;

use crate::ExceptionConfig;

/// A record the registry can judge.
#[derive(Clone, Copy, Debug)]
pub enum Record<'a> {
    Block(&'a BlockRecord),
    Transaction(&'a TransactionRecord),
}

/// Whether `record` is a grandfathered block or transaction.
pub fn is_exception(record: Record<'_>, config: &ExceptionConfig) -> bool {
    match record {
        Record::Block(block) => is_block_exception(block, config),
        Record::Transaction(tx) => is_transaction_exception(tx, config),
    }
}

/// Whether a standalone transaction is grandfathered.
///
/// Only canonical ids are listed. A legacy transaction id is never an
/// exception on its own; see [`is_transaction_exception_in_block`].
pub fn is_transaction_exception(tx: &TransactionRecord, config: &ExceptionConfig) -> bool {
    if config.pub_key_hash().is_none() {
        debug!(id = %tx.id, "no network configured, skipping exception lookup");
        return false;
    }
    if tx.id.format() != Some(IdFormat::Canonical) {
        return false;
    }
    let Some(listed) = config.exceptions().transactions.as_ref() else {
        debug!(id = %tx.id, "exceptions.transactions not configured");
        return false;
    };
    let hit = listed.contains(&tx.id);
    if hit {
        debug!(id = %tx.id, "transaction is a configured exception");
    }
    hit
}

/// Whether a legacy block is grandfathered.
///
/// If `exceptions.blocksTransactions` has an entry for the block, that entry
/// decides: the block's transaction ids must equal the listed ids as a
/// multiset, in any order. Otherwise the block is an exception when its id
/// is in `exceptions.blocks`.
pub fn is_block_exception(block: &BlockRecord, config: &ExceptionConfig) -> bool {
    if config.pub_key_hash().is_none() {
        debug!(id = %block.id, "no network configured, skipping exception lookup");
        return false;
    }
    if block.id.format() != Some(IdFormat::Legacy) {
        return false;
    }

    if let Some(expected) = expected_transactions(block, config) {
        let hit = transactions_match(block, expected);
        debug!(
            id = %block.id,
            expected = expected.len(),
            matched = hit,
            "checked block against its exception transaction list"
        );
        return hit;
    }

    let hit = config
        .exceptions()
        .blocks
        .as_ref()
        .is_some_and(|blocks| blocks.contains(&block.id));
    if hit {
        debug!(id = %block.id, "block is a configured exception");
    }
    hit
}

/// Whether `tx`, carried by `block`, is grandfathered.
///
/// Canonical ids are looked up directly. A legacy id qualifies only when the
/// enclosing block matches its exception transaction list as a whole and
/// that list names the transaction.
pub fn is_transaction_exception_in_block(
    tx: &TransactionRecord,
    block: &BlockRecord,
    config: &ExceptionConfig,
) -> bool {
    match tx.id.format() {
        Some(IdFormat::Canonical) => is_transaction_exception(tx, config),
        Some(IdFormat::Legacy) => {
            if config.pub_key_hash().is_none() || block.id.format() != Some(IdFormat::Legacy) {
                return false;
            }
            expected_transactions(block, config).is_some_and(|expected| {
                expected.contains(&tx.id) && transactions_match(block, expected)
            })
        }
        None => false,
    }
}

fn expected_transactions<'c>(
    block: &BlockRecord,
    config: &'c ExceptionConfig,
) -> Option<&'c [RecordId]> {
    config
        .exceptions()
        .blocks_transactions
        .as_ref()?
        .get(&block.id)
        .map(Vec::as_slice)
}

/// Order-independent comparison; an absent transaction list counts as empty.
fn transactions_match(block: &BlockRecord, expected: &[RecordId]) -> bool {
    let mut actual: Vec<&RecordId> = block.transaction_ids().collect();
    if actual.len() != expected.len() {
        return false;
    }
    let mut expected: Vec<&RecordId> = expected.iter().collect();
    actual.sort_unstable();
    expected.sort_unstable();
    actual == expected
}
