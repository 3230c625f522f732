use serde::{Deserialize, Serialize};

use crate::shared::constants::EVM_NAMESPACE;

// Basic types for display operations
pub type Address = String;

// Result type for better error handling
pub type DisplayResult<T> = Result<T, crate::shared::error::DisplayError>;

/// Canonical chain identifier - a namespace-qualified string that uniquely
/// identifies a blockchain network across all supported account types,
/// e.g. `eip155:1` for Ethereum Mainnet or `solana:<genesis-hash>` for
/// Solana. Legacy hexadecimal EVM chain ids (`0x1`) are NOT canonical and
/// must go through [`crate::core::chain::normalize`] first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CanonicalChainId(String);

impl CanonicalChainId {
    /// Parse a namespace-qualified identifier.
    ///
    /// The accepted shape follows the cross-chain identifier convention:
    /// a namespace of 3-8 lowercase alphanumeric characters (dashes
    /// allowed), a single colon, and a reference of 1-32 alphanumeric
    /// characters (dashes and underscores allowed). Anything else returns
    /// `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (namespace, reference) = raw.split_once(':')?;

        if namespace.len() < 3 || namespace.len() > 8 {
            return None;
        }
        if !namespace
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return None;
        }

        if reference.is_empty() || reference.len() > 32 {
            return None;
        }
        if !reference
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }

        Some(Self(raw.to_string()))
    }

    /// Build the canonical identifier for a numeric EVM chain id.
    pub fn from_evm_chain_id(chain_id: u64) -> Self {
        Self(format!("{}:{}", EVM_NAMESPACE, chain_id))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The namespace part, e.g. `eip155`
    pub fn namespace(&self) -> &str {
        self.0.split(':').next().unwrap_or("")
    }

    /// The reference part, e.g. `1` for `eip155:1`
    pub fn reference(&self) -> &str {
        self.0.split_once(':').map(|(_, r)| r).unwrap_or("")
    }

    /// Whether this identifier belongs to the EVM namespace
    pub fn is_evm(&self) -> bool {
        self.namespace() == EVM_NAMESPACE
    }

    /// The numeric chain id for EVM-namespace identifiers
    pub fn evm_chain_id(&self) -> Option<u64> {
        if !self.is_evm() {
            return None;
        }
        self.reference().parse().ok()
    }

    /// The legacy hexadecimal form for EVM-namespace identifiers,
    /// e.g. `eip155:1` maps back to `0x1`
    pub fn to_legacy_hex(&self) -> Option<String> {
        self.evm_chain_id().map(|id| format!("0x{:x}", id))
    }
}

impl std::fmt::Display for CanonicalChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CanonicalChainId> for String {
    fn from(id: CanonicalChainId) -> Self {
        id.0
    }
}

/// Address split for truncated rendering.
///
/// For addresses of at least `prefix_len + suffix_len` characters the
/// three segments concatenate back to the original address exactly. For
/// shorter addresses `middle` is empty and `prefix`/`suffix` may overlap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressSegments {
    pub prefix: String,
    pub middle: String,
    pub suffix: String,
}

/// Explorer navigation derived for an address.
///
/// `url` is `None` when the network is unknown or carries no explorer
/// endpoints; the view must disable the navigation action in that case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExplorerTarget {
    pub label: String,
    pub url: Option<String>,
}

/// Everything the account-address view renders.
///
/// Recomputed per render from the request inputs and the injected network
/// registry; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressDisplay {
    pub account_name: String,
    pub network_name: String,
    pub network_image: Option<String>,
    pub native_currency: Option<String>,
    pub segments: AddressSegments,
    pub explorer: ExplorerTarget,
    /// Raw address the copy-to-clipboard trigger binds to
    pub clipboard_payload: Address,
}
