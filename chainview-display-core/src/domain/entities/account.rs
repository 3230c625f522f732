//! Account entity for the display core
//!
//! This module contains the account record as seen by the display layer.
//! Accounts are owned by the wallet's account registry; this component
//! only reads their display metadata and chain scopes.

use serde::{Deserialize, Serialize};

use crate::shared::error::DisplayError;
use crate::shared::types::{Address, CanonicalChainId};

/// Account record with display metadata and supported chain scopes.
///
/// A scope is a capability declaration indicating which chain(s) the
/// account can operate on, stored in canonical chain identifier form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountRecord {
    pub address: Address,
    pub name: String,
    pub scopes: Vec<CanonicalChainId>,
}

impl AccountRecord {
    pub fn new(
        address: impl Into<Address>,
        name: impl Into<String>,
        scopes: Vec<CanonicalChainId>,
    ) -> Result<Self, DisplayError> {
        let address = address.into();
        if address.is_empty() {
            return Err(DisplayError::validation("Account address cannot be empty"));
        }

        Ok(Self {
            address,
            name: name.into(),
            scopes,
        })
    }

    /// Whether the account declares support for the given chain
    pub fn supports(&self, chain_id: &CanonicalChainId) -> bool {
        self.scopes.contains(chain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_creation() {
        let account = AccountRecord::new(
            "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6",
            "Savings",
            vec![CanonicalChainId::from_evm_chain_id(1)],
        )
        .expect("Failed to create test account");

        assert_eq!(account.name, "Savings");
        assert!(account.supports(&CanonicalChainId::from_evm_chain_id(1)));
        assert!(!account.supports(&CanonicalChainId::from_evm_chain_id(137)));
    }

    #[test]
    fn test_account_rejects_empty_address() {
        let result = AccountRecord::new("", "Savings", vec![]);
        assert!(matches!(result, Err(DisplayError::Validation(_))));
    }
}
