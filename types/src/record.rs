//! Block and transaction records as seen by validation.
//!
//! These are the minimal shapes the exception registry reads. They are owned
//! by the block/transaction pipeline and deserialize from its JSON form, where
//! `transactions` may be absent on a block.

use serde::{Deserialize, Serialize};

use crate::RecordId;

/// A transaction as it is listed inside a block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRef {
    #[serde(default)]
    pub id: RecordId,
}

/// A standalone transaction record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub id: RecordId,
}

/// A block record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    #[serde(default)]
    pub id: RecordId,

    /// Transactions carried by the block, in block order. `None` when the
    /// record was produced without its transaction list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<TransactionRef>>,
}

impl TransactionRecord {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self { id: id.into() }
    }
}

impl BlockRecord {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            transactions: None,
        }
    }

    /// Attach a transaction list, given as ids in block order.
    pub fn with_transactions<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RecordId>,
    {
        self.transactions = Some(
            ids.into_iter()
                .map(|id| TransactionRef { id: id.into() })
                .collect(),
        );
        self
    }

    /// Ids of the carried transactions; an absent list yields nothing.
    pub fn transaction_ids(&self) -> impl Iterator<Item = &RecordId> {
        self.transactions.iter().flatten().map(|tx| &tx.id)
    }
}
