//! Network entity for the display core
//!
//! A network record describes the display metadata of one blockchain
//! network. Records are owned by the wallet's network registry; this
//! component only ever reads them.

use serde::{Deserialize, Serialize};

use crate::shared::constants::NetworkConfig;
use crate::shared::types::CanonicalChainId;

/// Display metadata for a blockchain network, keyed by canonical chain
/// identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkRecord {
    pub chain_id: CanonicalChainId,
    pub name: String,
    pub native_currency: String,
    /// Ordered explorer base URLs; possibly empty. Link derivation uses
    /// the first entry.
    pub explorer_urls: Vec<String>,
    pub evm_compatible: bool,
    /// Reference to the network icon asset, resolved by the view layer
    pub image: Option<String>,
}

impl NetworkRecord {
    pub fn new(
        chain_id: CanonicalChainId,
        name: impl Into<String>,
        native_currency: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            name: name.into(),
            native_currency: native_currency.into(),
            explorer_urls: Vec::new(),
            evm_compatible: false,
            image: None,
        }
    }

    /// The first explorer base URL, when any is configured
    pub fn primary_explorer(&self) -> Option<&str> {
        self.explorer_urls.first().map(|s| s.as_str())
    }
}

impl From<&NetworkConfig> for NetworkRecord {
    fn from(config: &NetworkConfig) -> Self {
        let chain_id = CanonicalChainId::parse(config.chain_id)
            .expect("Built-in network chain id is not canonical");
        Self {
            chain_id,
            name: config.name.to_string(),
            native_currency: config.native_currency.to_string(),
            explorer_urls: config.explorer_urls.iter().map(|s| s.to_string()).collect(),
            evm_compatible: config.evm_compatible,
            image: Some(config.image.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{BUILTIN_NETWORKS, ETHEREUM_MAINNET_CONFIG};

    #[test]
    fn test_record_from_config() {
        let record = NetworkRecord::from(&ETHEREUM_MAINNET_CONFIG);

        assert_eq!(record.chain_id.as_str(), "eip155:1");
        assert_eq!(record.name, "Ethereum Mainnet");
        assert_eq!(record.native_currency, "ETH");
        assert_eq!(record.primary_explorer(), Some("https://etherscan.io"));
        assert!(record.evm_compatible);
    }

    #[test]
    fn test_all_builtin_configs_convert() {
        for config in BUILTIN_NETWORKS {
            let record = NetworkRecord::from(*config);
            assert!(!record.name.is_empty());
            assert!(!record.native_currency.is_empty());
        }
    }

    #[test]
    fn test_primary_explorer_empty() {
        let record = NetworkRecord::new(
            CanonicalChainId::from_evm_chain_id(99999),
            "Private Chain",
            "ETH",
        );
        assert_eq!(record.primary_explorer(), None);
    }
}
