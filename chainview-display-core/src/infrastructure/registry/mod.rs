//! In-memory network registry
//!
//! The process-wide registry of network records, populated once during
//! wallet initialization - from the built-in table, individual
//! registrations, or a JSON snapshot - and read-only afterwards. The
//! display layer consumes it through the [`NetworkSource`] seam.

use std::collections::HashMap;

use crate::domain::entities::NetworkRecord;
use crate::domain::repositories::NetworkSource;
use crate::shared::constants::BUILTIN_NETWORKS;
use crate::shared::error::DisplayError;
use crate::shared::types::{CanonicalChainId, DisplayResult};

/// Registry of network records keyed by canonical chain identifier.
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistry {
    networks: HashMap<CanonicalChainId, NetworkRecord>,
}

impl NetworkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in network table
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for config in BUILTIN_NETWORKS {
            let record = NetworkRecord::from(*config);
            registry.networks.insert(record.chain_id.clone(), record);
        }
        registry
    }

    /// Register a network record.
    ///
    /// Registration happens during wallet initialization; a duplicate
    /// chain identifier is a configuration mistake and is rejected.
    pub fn register(&mut self, record: NetworkRecord) -> DisplayResult<()> {
        if self.networks.contains_key(&record.chain_id) {
            return Err(DisplayError::registry(format!(
                "Network {} is already registered",
                record.chain_id
            )));
        }
        self.networks.insert(record.chain_id.clone(), record);
        Ok(())
    }

    /// Load a registry from a JSON snapshot of network records
    pub fn from_json(json: &str) -> DisplayResult<Self> {
        let records: Vec<NetworkRecord> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for record in records {
            registry.register(record)?;
        }
        Ok(registry)
    }

    /// Serialize the registry to a JSON snapshot
    pub fn to_json(&self) -> DisplayResult<String> {
        let mut records: Vec<&NetworkRecord> = self.networks.values().collect();
        records.sort_by(|a, b| a.chain_id.as_str().cmp(b.chain_id.as_str()));
        Ok(serde_json::to_string_pretty(&records)?)
    }

    /// Iterate over the registered records
    pub fn iter(&self) -> impl Iterator<Item = &NetworkRecord> {
        self.networks.values()
    }

    /// Number of registered networks
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl NetworkSource for NetworkRegistry {
    fn get(&self, chain_id: &CanonicalChainId) -> Option<NetworkRecord> {
        self.networks.get(chain_id).cloned()
    }
}
