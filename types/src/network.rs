//! Network identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::StrataError;

/// Identifies which Strata network a node is connected to.
///
/// Each network carries its own address version byte (`pubKeyHash`) and its
/// own table of grandfathered records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The production network.
    Mainnet,
    /// The public development network.
    Devnet,
    /// Local test network.
    Testnet,
}

impl NetworkId {
    pub const ALL: [NetworkId; 3] = [Self::Mainnet, Self::Devnet, Self::Testnet];

    /// Address version byte for this network.
    pub fn pub_key_hash(&self) -> u8 {
        match self {
            Self::Mainnet => 23,
            Self::Devnet => 30,
            Self::Testnet => 23,
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Devnet => "devnet",
            Self::Testnet => "testnet",
        }
    }
}

impl FromStr for NetworkId {
    type Err = StrataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "devnet" => Ok(Self::Devnet),
            "testnet" => Ok(Self::Testnet),
            other => Err(StrataError::UnknownNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
