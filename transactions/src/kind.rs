//! Transaction kind tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type group of the built-in transaction kinds.
pub const CORE_TYPE_GROUP: u32 = 1;

/// Identifies a payload shape on the wire: a type group plus a type id
/// within that group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransactionKind {
    pub type_group: u32,
    pub type_id: u16,
}

impl TransactionKind {
    pub const VOTE: Self = Self::new(CORE_TYPE_GROUP, 3);

    pub const fn new(type_group: u32, type_id: u16) -> Self {
        Self {
            type_group,
            type_id,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_group, self.type_id)
    }
}

/// Static facts about a transaction kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindInfo {
    /// Stable lowercase name, e.g. `"vote"`.
    pub key: &'static str,
    /// Payload layout version.
    pub version: u8,
    /// Fee charged when no dynamic fee applies, in the smallest unit.
    pub default_fee: u64,
    /// Largest encoded payload this kind may produce, in bytes.
    pub max_len: usize,
}
