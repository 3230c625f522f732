//! Network source for registry access
//!
//! The process-wide network registry is owned by wallet initialization.
//! The display layer reads it through this narrow trait so that a fixture
//! registry can be injected in tests and no code reaches into global
//! state.

use crate::domain::entities::NetworkRecord;
use crate::shared::types::CanonicalChainId;

/// Read-only keyed lookup of network records.
///
/// Lookups are idempotent and safe to call on every render pass.
pub trait NetworkSource {
    /// Retrieve the record for a canonical chain identifier
    fn get(&self, chain_id: &CanonicalChainId) -> Option<NetworkRecord>;

    /// Whether a record exists for the identifier
    fn contains(&self, chain_id: &CanonicalChainId) -> bool {
        self.get(chain_id).is_some()
    }
}

impl<S: NetworkSource + ?Sized> NetworkSource for &S {
    fn get(&self, chain_id: &CanonicalChainId) -> Option<NetworkRecord> {
        (**self).get(chain_id)
    }
}
