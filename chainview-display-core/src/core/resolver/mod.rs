//! Network resolution and display assembly
//!
//! This module holds the single resolver behind the account-address
//! modal. The view hands it the raw inputs on every render pass and
//! renders the derived values verbatim; nothing is recomputed on the
//! view side and nothing here blocks, awaits, or mutates shared state.

use crate::core::chain::{normalize, ChainRef};
use crate::core::explorer::explorer_target;
use crate::core::format::{segment, truncated};
use crate::domain::entities::{AccountRecord, NetworkRecord};
use crate::domain::repositories::NetworkSource;
use crate::shared::constants::UNKNOWN_NETWORK_NAME;
use crate::shared::types::AddressDisplay;

/// Inputs to one render of the address display.
#[derive(Debug, Clone, Copy)]
pub struct DisplayRequest<'a> {
    /// Raw account address, rendered as the scannable code and bound to
    /// the copy action
    pub address: &'a str,
    /// Chain identifier in either textual encoding
    pub chain_id: &'a str,
    /// Optional account record used for the display name and as a
    /// network hint
    pub account: Option<&'a AccountRecord>,
}

/// Resolver for the address display modal.
///
/// Takes the network registry through the read-only [`NetworkSource`]
/// seam so tests inject fixtures and production injects the wallet's
/// registry.
pub struct DisplayResolver<S: NetworkSource> {
    source: S,
}

impl<S: NetworkSource> DisplayResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve the network for a normalized chain identifier and an
    /// optional account hint.
    ///
    /// One function covers both historical resolution paths. The chain
    /// identifier is authoritative when it resolves; otherwise the
    /// account's scopes are consulted in declaration order. An account
    /// whose scopes include the requested chain therefore lands on the
    /// same record through either hint. Returns `None` when nothing
    /// resolves; callers degrade to placeholder display.
    pub fn resolve_network(
        &self,
        chain: &ChainRef,
        account: Option<&AccountRecord>,
    ) -> Option<NetworkRecord> {
        if let Some(id) = chain.canonical() {
            if let Some(record) = self.source.get(id) {
                return Some(record);
            }
            log::debug!("No network record registered for chain id {}", id);
        }

        if let Some(account) = account {
            for scope in &account.scopes {
                if let Some(record) = self.source.get(scope) {
                    return Some(record);
                }
            }
            log::debug!(
                "No registered network among {} account scopes",
                account.scopes.len()
            );
        }

        None
    }

    /// Assemble everything the address modal renders.
    ///
    /// Every failure mode degrades to a neutral placeholder: an
    /// unresolvable chain identifier or missing record shows
    /// "Unknown Network" with navigation disabled, never an error.
    pub fn display(&self, request: &DisplayRequest<'_>) -> AddressDisplay {
        let chain = normalize(request.chain_id);
        let network = self.resolve_network(&chain, request.account);

        let account_name = request
            .account
            .map(|account| account.name.trim())
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
            .unwrap_or_else(|| truncated(request.address));

        AddressDisplay {
            account_name,
            network_name: network
                .as_ref()
                .map(|n| n.name.clone())
                .unwrap_or_else(|| UNKNOWN_NETWORK_NAME.to_string()),
            network_image: network.as_ref().and_then(|n| n.image.clone()),
            native_currency: network.as_ref().map(|n| n.native_currency.clone()),
            segments: segment(request.address),
            explorer: explorer_target(network.as_ref(), request.address),
            clipboard_payload: request.address.to_string(),
        }
    }
}
