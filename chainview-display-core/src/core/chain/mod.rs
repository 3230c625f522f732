//! Chain identifier normalization
//!
//! Chain identifiers reach the display layer in two textual encodings:
//! the canonical namespace-qualified form (`eip155:1`,
//! `solana:<genesis-hash>`) used across all account types, and the
//! legacy hexadecimal form (`0x1`) that only ever denotes EVM networks.
//! Normalization maps both onto the canonical form so every downstream
//! lookup has a single key shape.

use crate::shared::constants::{LEGACY_HEX_PREFIX, MAX_LEGACY_HEX_DIGITS};
use crate::shared::types::CanonicalChainId;
use crate::shared::utils::is_hex_digits;

/// A normalized chain identifier.
///
/// `Unknown` is an explicit sentinel: unrecognized input never guesses a
/// canonical value, and callers degrade to placeholder display rather
/// than failing the render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainRef {
    Canonical(CanonicalChainId),
    Unknown,
}

impl ChainRef {
    /// The canonical identifier, when normalization succeeded
    pub fn canonical(&self) -> Option<&CanonicalChainId> {
        match self {
            ChainRef::Canonical(id) => Some(id),
            ChainRef::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ChainRef::Unknown)
    }
}

/// Normalize a raw chain identifier string.
///
/// Canonical input passes through unchanged. Legacy-hex input converts
/// to the canonical EVM-namespace form for its numeric chain id. Any
/// other shape - including malformed or out-of-range hex - yields
/// [`ChainRef::Unknown`] with a diagnostic log entry.
///
/// Pure and deterministic; the log entry is the only side effect.
pub fn normalize(raw: &str) -> ChainRef {
    let raw = raw.trim();

    if let Some(id) = CanonicalChainId::parse(raw) {
        return ChainRef::Canonical(id);
    }

    if let Some(digits) = strip_legacy_hex_prefix(raw) {
        if is_hex_digits(digits) && digits.len() <= MAX_LEGACY_HEX_DIGITS {
            if let Ok(chain_id) = u64::from_str_radix(digits, 16) {
                return ChainRef::Canonical(CanonicalChainId::from_evm_chain_id(chain_id));
            }
        }
        log::warn!("Legacy hex chain id {:?} is malformed or out of range", raw);
        return ChainRef::Unknown;
    }

    log::warn!("Unrecognized chain identifier shape: {:?}", raw);
    ChainRef::Unknown
}

fn strip_legacy_hex_prefix(raw: &str) -> Option<&str> {
    raw.strip_prefix(LEGACY_HEX_PREFIX)
        .or_else(|| raw.strip_prefix("0X"))
}
