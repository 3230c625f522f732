//! Constants for the display core
//!
//! This module contains all constants used throughout the display core.

// Chain identifier namespaces
pub const EVM_NAMESPACE: &str = "eip155";
pub const SOLANA_NAMESPACE: &str = "solana";

// Legacy hexadecimal chain id shape
pub const LEGACY_HEX_PREFIX: &str = "0x";
pub const MAX_LEGACY_HEX_DIGITS: usize = 16; // fits u64

// Display labels
pub const UNKNOWN_NETWORK_NAME: &str = "Unknown Network";
pub const GENERIC_EXPLORER_LABEL: &str = "View on Explorer";

// Address segmentation defaults
pub const ADDRESS_PREFIX_LEN: usize = 6;
pub const ADDRESS_SUFFIX_LEN: usize = 5;

// Explorer brand classification table. Ordered (host substring, brand)
// pairs; classification stops at the first matching entry, so additions
// only touch this data, never control flow.
pub const EXPLORER_BRANDS: &[(&str, &str)] = &[
    ("etherscan", "Etherscan"),
    ("polygonscan", "Polygonscan"),
    ("arbiscan", "Arbiscan"),
    ("solscan", "Solscan"),
    ("bscscan", "BSCScan"),
    ("basescan", "BaseScan"),
    ("snowtrace", "Snowtrace"),
];

// Supported built-in networks, keyed by canonical chain identifier
pub const SUPPORTED_CHAIN_IDS: &[&str] = &[
    "eip155:1",
    "eip155:137",
    "eip155:42161",
    "eip155:56",
    "eip155:8453",
    "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp",
];

// Network configurations
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub chain_id: &'static str,
    pub name: &'static str,
    pub native_currency: &'static str,
    pub explorer_urls: &'static [&'static str],
    pub evm_compatible: bool,
    pub image: &'static str,
}

pub static ETHEREUM_MAINNET_CONFIG: NetworkConfig = NetworkConfig {
    chain_id: "eip155:1",
    name: "Ethereum Mainnet",
    native_currency: "ETH",
    explorer_urls: &["https://etherscan.io"],
    evm_compatible: true,
    image: "networks/ethereum.svg",
};

pub static POLYGON_CONFIG: NetworkConfig = NetworkConfig {
    chain_id: "eip155:137",
    name: "Polygon",
    native_currency: "POL",
    explorer_urls: &["https://polygonscan.com"],
    evm_compatible: true,
    image: "networks/polygon.svg",
};

pub static ARBITRUM_ONE_CONFIG: NetworkConfig = NetworkConfig {
    chain_id: "eip155:42161",
    name: "Arbitrum One",
    native_currency: "ETH",
    explorer_urls: &["https://arbiscan.io"],
    evm_compatible: true,
    image: "networks/arbitrum.svg",
};

pub static BNB_CHAIN_CONFIG: NetworkConfig = NetworkConfig {
    chain_id: "eip155:56",
    name: "BNB Smart Chain",
    native_currency: "BNB",
    explorer_urls: &["https://bscscan.com"],
    evm_compatible: true,
    image: "networks/bnb.svg",
};

pub static BASE_CONFIG: NetworkConfig = NetworkConfig {
    chain_id: "eip155:8453",
    name: "Base",
    native_currency: "ETH",
    explorer_urls: &["https://basescan.org"],
    evm_compatible: true,
    image: "networks/base.svg",
};

pub static SOLANA_MAINNET_CONFIG: NetworkConfig = NetworkConfig {
    chain_id: "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp",
    name: "Solana Mainnet",
    native_currency: "SOL",
    explorer_urls: &["https://solscan.io"],
    evm_compatible: false,
    image: "networks/solana.svg",
};

pub static BUILTIN_NETWORKS: &[&NetworkConfig] = &[
    &ETHEREUM_MAINNET_CONFIG,
    &POLYGON_CONFIG,
    &ARBITRUM_ONE_CONFIG,
    &BNB_CHAIN_CONFIG,
    &BASE_CONFIG,
    &SOLANA_MAINNET_CONFIG,
];

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_configs() {
        assert_eq!(ETHEREUM_MAINNET_CONFIG.chain_id, "eip155:1");
        assert_eq!(ETHEREUM_MAINNET_CONFIG.name, "Ethereum Mainnet");
        assert_eq!(SOLANA_MAINNET_CONFIG.native_currency, "SOL");
        assert!(!SOLANA_MAINNET_CONFIG.evm_compatible);
    }

    #[test]
    fn test_builtin_networks_match_supported_list() {
        assert_eq!(BUILTIN_NETWORKS.len(), SUPPORTED_CHAIN_IDS.len());
        for config in BUILTIN_NETWORKS {
            assert!(
                SUPPORTED_CHAIN_IDS.contains(&config.chain_id),
                "Built-in network {} missing from supported list",
                config.chain_id
            );
        }
    }

    #[test]
    fn test_explorer_brand_substrings_are_distinct() {
        for (i, (substring, _)) in EXPLORER_BRANDS.iter().enumerate() {
            for (other, _) in &EXPLORER_BRANDS[i + 1..] {
                assert!(
                    !substring.contains(other) && !other.contains(substring),
                    "Brand substrings {} and {} overlap",
                    substring,
                    other
                );
            }
        }
    }

    #[test]
    fn test_segmentation_defaults() {
        assert_eq!(ADDRESS_PREFIX_LEN, 6);
        assert_eq!(ADDRESS_SUFFIX_LEN, 5);
    }
}
