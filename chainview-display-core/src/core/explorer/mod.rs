//! Explorer link and label derivation
//!
//! Builds block-explorer deep links for addresses and transactions and
//! derives the button label from the explorer's host. Brand recognition
//! runs over the ordered table in [`crate::shared::constants`], so every
//! supported brand can be enumerated in tests and new brands are a data
//! change.

use crate::domain::entities::NetworkRecord;
use crate::shared::constants::{EXPLORER_BRANDS, GENERIC_EXPLORER_LABEL};
use crate::shared::types::ExplorerTarget;
use crate::shared::utils::{host_of, trim_trailing_slash};

/// Derive the explorer button label and navigation target for an address.
///
/// With no network or no configured explorer URLs the label is the
/// generic "View on Explorer" and `url` is `None`, which the view renders
/// as a disabled action. A recognized explorer host produces a branded
/// label; an unrecognized host keeps the URL but falls back to the
/// generic label.
pub fn explorer_target(network: Option<&NetworkRecord>, address: &str) -> ExplorerTarget {
    let base = match network.and_then(|n| n.primary_explorer()) {
        Some(base) => base,
        None => {
            return ExplorerTarget {
                label: GENERIC_EXPLORER_LABEL.to_string(),
                url: None,
            }
        }
    };

    let label = match brand_of(base) {
        Some(brand) => format!("View address on {}", brand),
        None => GENERIC_EXPLORER_LABEL.to_string(),
    };

    ExplorerTarget {
        label,
        url: Some(address_url(base, address)),
    }
}

/// Build the `/address/{address}` deep link for an explorer base URL.
/// The address is appended verbatim; explorer addresses are URL-safe.
pub fn address_url(base: &str, address: &str) -> String {
    format!("{}/address/{}", trim_trailing_slash(base), address)
}

/// Build the `/tx/{hash}` deep link for the network's primary explorer,
/// for the account surface's activity rows.
pub fn transaction_url(network: Option<&NetworkRecord>, tx_hash: &str) -> Option<String> {
    let base = network.and_then(|n| n.primary_explorer())?;
    Some(format!("{}/tx/{}", trim_trailing_slash(base), tx_hash))
}

/// Classify an explorer base URL's host against the brand table.
/// Checks every known brand and stops at the first match.
fn brand_of(base_url: &str) -> Option<&'static str> {
    let host = host_of(base_url);
    EXPLORER_BRANDS
        .iter()
        .find(|(substring, _)| host.contains(substring))
        .map(|(_, brand)| *brand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::BUILTIN_NETWORKS;
    use crate::shared::types::CanonicalChainId;

    const ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";

    fn network_with_explorer(base: &str) -> NetworkRecord {
        let mut record = NetworkRecord::new(
            CanonicalChainId::from_evm_chain_id(1),
            "Test Network",
            "ETH",
        );
        record.explorer_urls = vec![base.to_string()];
        record
    }

    #[test]
    fn test_all_brands_are_recognized() {
        let cases = [
            ("https://etherscan.io", "Etherscan"),
            ("https://polygonscan.com", "Polygonscan"),
            ("https://arbiscan.io", "Arbiscan"),
            ("https://solscan.io", "Solscan"),
            ("https://bscscan.com", "BSCScan"),
            ("https://basescan.org", "BaseScan"),
            ("https://snowtrace.io", "Snowtrace"),
        ];
        assert_eq!(cases.len(), EXPLORER_BRANDS.len());

        for (base, brand) in cases {
            let network = network_with_explorer(base);
            let target = explorer_target(Some(&network), ADDRESS);
            assert_eq!(target.label, format!("View address on {}", brand));
        }
    }

    #[test]
    fn test_branded_target_for_subdomain_host() {
        let network = network_with_explorer("https://optimistic.etherscan.io");
        let target = explorer_target(Some(&network), ADDRESS);

        assert_eq!(target.label, "View address on Etherscan");
        assert_eq!(
            target.url.expect("explorer URL is configured"),
            format!("https://optimistic.etherscan.io/address/{}", ADDRESS)
        );
    }

    #[test]
    fn test_trailing_slash_stripped_once() {
        let network = network_with_explorer("https://etherscan.io/");
        let target = explorer_target(Some(&network), ADDRESS);
        assert_eq!(
            target.url.expect("explorer URL is configured"),
            format!("https://etherscan.io/address/{}", ADDRESS)
        );
    }

    #[test]
    fn test_unrecognized_host_keeps_url_with_generic_label() {
        let network = network_with_explorer("https://explorer.example.org");
        let target = explorer_target(Some(&network), ADDRESS);

        assert_eq!(target.label, GENERIC_EXPLORER_LABEL);
        assert_eq!(
            target.url.expect("explorer URL is configured"),
            format!("https://explorer.example.org/address/{}", ADDRESS)
        );
    }

    #[test]
    fn test_no_network_disables_navigation() {
        let target = explorer_target(None, ADDRESS);
        assert_eq!(target.label, GENERIC_EXPLORER_LABEL);
        assert_eq!(target.url, None);
    }

    #[test]
    fn test_network_without_explorer_disables_navigation() {
        let record = NetworkRecord::new(
            CanonicalChainId::from_evm_chain_id(99999),
            "Private Chain",
            "ETH",
        );
        let target = explorer_target(Some(&record), ADDRESS);
        assert_eq!(target.label, GENERIC_EXPLORER_LABEL);
        assert_eq!(target.url, None);
    }

    #[test]
    fn test_transaction_url() {
        let network = network_with_explorer("https://etherscan.io/");
        assert_eq!(
            transaction_url(Some(&network), "0xabc").expect("explorer URL is configured"),
            "https://etherscan.io/tx/0xabc"
        );
        assert_eq!(transaction_url(None, "0xabc"), None);
    }

    #[test]
    fn test_builtin_explorers_all_carry_brands() {
        for config in BUILTIN_NETWORKS {
            let record = NetworkRecord::from(*config);
            let target = explorer_target(Some(&record), ADDRESS);
            assert!(
                target.label.starts_with("View address on "),
                "Built-in network {} should map to a branded label",
                config.chain_id
            );
        }
    }
}
