//! Repository traits for data access
//!
//! This module defines the read-only access seams the display layer
//! depends on.

pub mod network_source;

// Re-export repository traits
pub use network_source::*;
