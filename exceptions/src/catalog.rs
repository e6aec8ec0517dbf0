//! Per-network exception tables.
//!
//! Each network keeps its own grandfathered records. A catalog file holds
//! one section per network:
//!
//! ```toml
//! [devnet.network]
//! pubKeyHash = 30
//!
//! [devnet.exceptions]
//! blocks = ["13114381566690093367"]
//! ```
//!
//! A section without `pubKeyHash` takes the network's own value; a section
//! declaring a different one is rejected.

use serde::{Deserialize, Serialize};
use std::path::Path;

use strata_types::NetworkId;

use crate::config::read_file;
use crate::{ConfigError, ExceptionConfig};

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    mainnet: Option<ExceptionConfig>,
    #[serde(default)]
    devnet: Option<ExceptionConfig>,
    #[serde(default)]
    testnet: Option<ExceptionConfig>,
}

impl TryFrom<RawCatalog> for ExceptionCatalog {
    type Error = ConfigError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        let mut catalog = Self::default();
        for (network, config) in [
            (NetworkId::Mainnet, raw.mainnet),
            (NetworkId::Devnet, raw.devnet),
            (NetworkId::Testnet, raw.testnet),
        ] {
            if let Some(config) = config {
                catalog.insert(network, config)?;
            }
        }
        Ok(catalog)
    }
}

/// Exception snapshots for every configured network.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct ExceptionCatalog {
    #[serde(skip_serializing_if = "Option::is_none")]
    mainnet: Option<ExceptionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    devnet: Option<ExceptionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    testnet: Option<ExceptionConfig>,
}

impl ExceptionCatalog {
    /// Add or replace the tables of `network`.
    pub fn insert(&mut self, network: NetworkId, config: ExceptionConfig) -> Result<(), ConfigError> {
        let expected = network.pub_key_hash();
        let config = match config.pub_key_hash() {
            None => config.with_pub_key_hash(expected),
            Some(found) if found == expected => config,
            Some(found) => {
                return Err(ConfigError::NetworkMismatch {
                    network,
                    expected,
                    found,
                })
            }
        };
        *self.slot(network) = Some(config);
        Ok(())
    }

    /// The tables of `network`, if the catalog has a section for it.
    pub fn select(&self, network: NetworkId) -> Option<&ExceptionConfig> {
        match network {
            NetworkId::Mainnet => self.mainnet.as_ref(),
            NetworkId::Devnet => self.devnet.as_ref(),
            NetworkId::Testnet => self.testnet.as_ref(),
        }
    }

    /// Networks with a section in this catalog.
    pub fn networks(&self) -> impl Iterator<Item = NetworkId> + '_ {
        NetworkId::ALL
            .into_iter()
            .filter(|network| self.select(*network).is_some())
    }

    fn slot(&mut self, network: NetworkId) -> &mut Option<ExceptionConfig> {
        match network {
            NetworkId::Mainnet => &mut self.mainnet,
            NetworkId::Devnet => &mut self.devnet,
            NetworkId::Testnet => &mut self.testnet,
        }
    }

    /// Load a catalog from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let catalog = Self::from_toml_str(&read_file(path)?)?;
        tracing::info!(
            path = %path.display(),
            networks = catalog.networks().count(),
            "loaded exception catalog"
        );
        Ok(catalog)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExceptionTables;

    #[test]
    fn sections_are_selected_by_network() {
        let toml = r#"
            [mainnet.exceptions]
            blocks = ["5139199631254983076"]

            [devnet.network]
            pubKeyHash = 30

            [devnet.exceptions]
            blocks = ["13114381566690093367"]
        "#;
        let catalog = ExceptionCatalog::from_toml_str(toml).unwrap();
        assert_eq!(
            catalog.networks().collect::<Vec<_>>(),
            vec![NetworkId::Mainnet, NetworkId::Devnet]
        );
        assert_eq!(catalog.select(NetworkId::Mainnet).unwrap().pub_key_hash(), Some(23));
        assert_eq!(catalog.select(NetworkId::Devnet).unwrap().pub_key_hash(), Some(30));
        assert!(catalog.select(NetworkId::Testnet).is_none());
    }

    #[test]
    fn loads_from_json() {
        let json = r#"{
            "testnet": {
                "exceptions": { "blocks": ["13114381566690093367"] }
            },
            "devnet": {
                "network": { "pubKeyHash": 30 }
            }
        }"#;
        let catalog = ExceptionCatalog::from_json_str(json).unwrap();
        assert_eq!(
            catalog.networks().collect::<Vec<_>>(),
            vec![NetworkId::Devnet, NetworkId::Testnet]
        );
        let testnet = catalog.select(NetworkId::Testnet).unwrap();
        assert_eq!(testnet.pub_key_hash(), Some(23));
        assert_eq!(testnet.exceptions().blocks.as_ref().map(|b| b.len()), Some(1));

        let mismatched = r#"{ "mainnet": { "network": { "pubKeyHash": 30 } } }"#;
        assert!(matches!(
            ExceptionCatalog::from_json_str(mismatched),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_foreign_pub_key_hash() {
        let config = ExceptionConfig::for_network(NetworkId::Devnet, ExceptionTables::default())
            .unwrap();
        let mut catalog = ExceptionCatalog::default();
        assert_eq!(
            catalog.insert(NetworkId::Mainnet, config),
            Err(ConfigError::NetworkMismatch {
                network: NetworkId::Mainnet,
                expected: 23,
                found: 30,
            })
        );
        assert!(catalog.select(NetworkId::Mainnet).is_none());
    }
}
