//! Record ids and their two historical formats.
//!
//! Ids minted before the hashing-scheme migration are shorter than the
//! 64-character canonical form. The two formats are never compared against
//! each other, so every id is classified before it is matched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length in characters of a canonical (post-migration) id.
pub const CANONICAL_ID_LEN: usize = 64;

/// Which id scheme a record id belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdFormat {
    /// 64 hex characters.
    Canonical,
    /// Shorter, pre-migration id.
    Legacy,
}

impl IdFormat {
    /// Classify an id. Canonical ids are exactly 64 ASCII hex characters;
    /// legacy ids are shorter. Empty ids, longer ids and 64-byte ids that are
    /// not hex belong to neither scheme.
    pub fn of(id: &str) -> Option<Self> {
        match id.len() {
            0 => None,
            CANONICAL_ID_LEN if id.bytes().all(|b| b.is_ascii_hexdigit()) => {
                Some(Self::Canonical)
            }
            n if n < CANONICAL_ID_LEN => Some(Self::Legacy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Legacy => "legacy",
        }
    }
}

/// The content id of a block or transaction, as carried by the record.
///
/// An absent id deserializes to the empty id, which has no format.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn format(&self) -> Option<IdFormat> {
        IdFormat::of(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
