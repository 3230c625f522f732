//! Error handling for the display core
//!
//! This module defines the error types used throughout the display core.
//! The resolver surface itself never fails - malformed input degrades to
//! placeholders - so these errors only cover the fallible edges around it,
//! such as registry population.

use thiserror::Error;

/// Display core error type
#[derive(Error, Debug, Clone)]
pub enum DisplayError {
    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Chain identifier error: {0}")]
    ChainId(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DisplayError {
    /// Create a registry error
    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry(message.into())
    }

    /// Create a chain identifier error
    pub fn chain_id(message: impl Into<String>) -> Self {
        Self::ChainId(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

impl From<serde_json::Error> for DisplayError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
