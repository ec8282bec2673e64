//! Error types for wallet session operations
//!
//! Failures raised by the storage backend, the indexer or the wallet
//! providers surface through [`SessionError`]. The session orchestrator
//! passes them through untouched.

use thiserror::Error;

/// Core error type for session, connector and stdlib operations
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Indexer answered with a non-success status or an unexpected body
    #[error("Indexer error: {0}")]
    Indexer(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    /// `get_default_account` was called before any fallback was installed
    #[error("No wallet fallback configured")]
    NoWalletFallback,

    #[error("Wallet provider returned no accounts: {0}")]
    NoAccounts(String),

    /// Rejection or failure reported by a wallet provider
    #[error("Wallet error: {0}")]
    Wallet(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage lock poisoned: {0}")]
    Poisoned(String),
}

// Helper functions for common error scenarios
impl SessionError {
    pub fn indexer(msg: impl Into<String>) -> Self {
        Self::Indexer(msg.into())
    }

    pub fn invalid_address(addr: impl Into<String>) -> Self {
        Self::InvalidAddress(addr.into())
    }
}
