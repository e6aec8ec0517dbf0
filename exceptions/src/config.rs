//! Exception configuration: the immutable snapshot every registry call reads.
//!
//! Documents follow the ledger's network config schema:
//!
//! ```json
//! {
//!   "exceptions": {
//!     "transactions": ["<64-char id>", ...],
//!     "blocks": ["<legacy id>", ...],
//!     "blocksTransactions": { "<legacy block id>": ["<tx id>", ...] }
//!   },
//!   "network": { "pubKeyHash": 30 }
//! }
//! ```
//!
//! Every table is optional. A missing table never matches anything.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use strata_types::{IdFormat, NetworkId, RecordId};

use crate::ConfigError;

/// The grandfathered-record tables of one network.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionTables {
    /// Canonical transaction ids that bypass validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<BTreeSet<RecordId>>,

    /// Legacy block ids that bypass validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<BTreeSet<RecordId>>,

    /// Legacy block id → the transaction ids that block must carry, in any
    /// order, for the block to be an exception.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks_transactions: Option<BTreeMap<RecordId, Vec<RecordId>>>,
}

impl ExceptionTables {
    pub fn with_transactions<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RecordId>,
    {
        self.transactions
            .get_or_insert_with(BTreeSet::new)
            .extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_blocks<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RecordId>,
    {
        self.blocks
            .get_or_insert_with(BTreeSet::new)
            .extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_block_transactions<I, S>(mut self, block: impl Into<RecordId>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RecordId>,
    {
        self.blocks_transactions
            .get_or_insert_with(BTreeMap::new)
            .insert(block.into(), ids.into_iter().map(Into::into).collect());
        self
    }

    /// Canonical and legacy ids live in separate tables and must never mix.
    fn validate(&self) -> Result<(), ConfigError> {
        for id in self.transactions.iter().flatten() {
            expect_format("transactions", id, IdFormat::Canonical)?;
        }
        for id in self.blocks.iter().flatten() {
            expect_format("blocks", id, IdFormat::Legacy)?;
        }
        for (block, txs) in self.blocks_transactions.iter().flatten() {
            expect_format("blocksTransactions", block, IdFormat::Legacy)?;
            if let Some(tx) = txs.iter().find(|tx| tx.format().is_none()) {
                return Err(ConfigError::InvalidId {
                    table: "blocksTransactions",
                    id: tx.to_string(),
                    expected: IdFormat::Canonical,
                });
            }
        }
        Ok(())
    }
}

fn expect_format(table: &'static str, id: &RecordId, expected: IdFormat) -> Result<(), ConfigError> {
    if id.format() != Some(expected) {
        return Err(ConfigError::InvalidId {
            table,
            id: id.to_string(),
            expected,
        });
    }
    Ok(())
}

/// Network parameters the registry consults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkParams {
    /// Address version byte of the network the tables belong to.
    #[serde(rename = "pubKeyHash", default, skip_serializing_if = "Option::is_none")]
    pub pub_key_hash: Option<u8>,
}

impl From<NetworkId> for NetworkParams {
    fn from(network: NetworkId) -> Self {
        Self {
            pub_key_hash: Some(network.pub_key_hash()),
        }
    }
}

#[derive(Deserialize)]
struct RawExceptionConfig {
    #[serde(default)]
    exceptions: ExceptionTables,
    #[serde(default)]
    network: NetworkParams,
}

impl TryFrom<RawExceptionConfig> for ExceptionConfig {
    type Error = ConfigError;

    fn try_from(raw: RawExceptionConfig) -> Result<Self, Self::Error> {
        Self::new(raw.network, raw.exceptions)
    }
}

/// A validated, read-only exception snapshot for one network.
///
/// Built once at startup and shared; there is no way to mutate it after
/// construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawExceptionConfig")]
pub struct ExceptionConfig {
    exceptions: ExceptionTables,
    network: NetworkParams,
}

impl ExceptionConfig {
    pub fn new(network: NetworkParams, exceptions: ExceptionTables) -> Result<Self, ConfigError> {
        exceptions.validate()?;
        Ok(Self {
            exceptions,
            network,
        })
    }

    /// Tables for a known network, tagged with its `pubKeyHash`.
    pub fn for_network(network: NetworkId, exceptions: ExceptionTables) -> Result<Self, ConfigError> {
        Self::new(network.into(), exceptions)
    }

    pub fn exceptions(&self) -> &ExceptionTables {
        &self.exceptions
    }

    pub fn network(&self) -> &NetworkParams {
        &self.network
    }

    pub fn pub_key_hash(&self) -> Option<u8> {
        self.network.pub_key_hash
    }

    pub(crate) fn with_pub_key_hash(mut self, pub_key_hash: u8) -> Self {
        self.network.pub_key_hash = Some(pub_key_hash);
        self
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&read_file(path.as_ref())?)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
