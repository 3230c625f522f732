//! ChainView Display Core
//!
//! Display-layer core for the ChainView wallet's account surface.
//! Derives everything the account-address modal renders: the resolved
//! network's display chrome, the truncated address segments, and the
//! block-explorer shortcut.
//!
//! ## Architecture
//!
//! This library follows a simplified architecture focused on core
//! functionality:
//!
//! - **Core**: chain identifier normalization, network resolution,
//!   explorer links, address formatting
//! - **Domain**: entities and the read-only registry seam
//! - **Infrastructure**: the in-memory network registry
//! - **Shared**: common types, constants, and utilities
//!
//! ## Design
//!
//! Everything on the resolver surface is synchronous, re-entrant pure
//! computation, recomputed per render pass. Failure modes degrade to
//! placeholders ("Unknown Network", a disabled explorer action) instead
//! of erroring; the only surfaced signal is a diagnostic log entry for
//! unrecognized chain identifier shapes. The modal shell, scannable code
//! image, clipboard, and localization stay with the embedding view.
//!
//! ## Usage
//!
//! ```rust
//! use chainview_display_core::{DisplayRequest, DisplayResolver, NetworkRegistry};
//!
//! let resolver = DisplayResolver::new(NetworkRegistry::builtin());
//! let display = resolver.display(&DisplayRequest {
//!     address: "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6",
//!     chain_id: "0x1",
//!     account: None,
//! });
//!
//! assert_eq!(display.network_name, "Ethereum Mainnet");
//! assert_eq!(display.explorer.label, "View address on Etherscan");
//! ```

// Re-export main modules for easy access
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types and operations
pub use crate::core::chain::{normalize, ChainRef};
pub use crate::core::explorer::{address_url, explorer_target, transaction_url};
pub use crate::core::format::{segment, segment_with, truncated};
pub use crate::core::resolver::{DisplayRequest, DisplayResolver};
pub use crate::domain::entities::{AccountRecord, NetworkRecord};
pub use crate::domain::repositories::NetworkSource;
pub use crate::infrastructure::registry::NetworkRegistry;
pub use crate::shared::error::DisplayError;
pub use crate::shared::types::{
    AddressDisplay, AddressSegments, CanonicalChainId, ExplorerTarget,
};

/// Initialize logging for standalone hosts.
///
/// Embedding views usually install their own logger; a second install
/// attempt is ignored.
pub fn init() {
    let _ = env_logger::try_init();
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_through_public_surface() {
        init();
        let resolver = DisplayResolver::new(NetworkRegistry::builtin());
        let display = resolver.display(&DisplayRequest {
            address: "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6",
            chain_id: "eip155:137",
            account: None,
        });

        assert_eq!(display.network_name, "Polygon");
        assert_eq!(display.explorer.label, "View address on Polygonscan");
    }

    #[test]
    fn test_init_is_reentrant() {
        init();
        init();
    }
}
