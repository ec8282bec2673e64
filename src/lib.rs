//! Wallet Session: client-side wallet sessions over Algorand
//!
//! This crate manages which wallet a user connects through (web wallet or
//! WalletConnect), persists a minimal session token and assembles the
//! connected account's balance and asset summary from the indexer.
//!
//! # Architecture
//!
//! - **Storage**: string-keyed session store (`user`, `walletconnect`, `active-chain`)
//! - **Network registry**: chain metadata and provider environments
//! - **Chain connector**: per-chain indexer access (Algorand implemented)
//! - **Stdlib facade**: account resolution, balances and wallet fallbacks
//! - **Session**: connect, reconnect, disconnect and session checks
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wallet_session::{Session, SessionConfig, StaticWalletProvider};
//!
//! let config = SessionConfig::from_env();
//! let web_wallet = Arc::new(StaticWalletProvider::new("watch", vec![address]));
//! let session = Session::algorand(&config, web_wallet)?;
//!
//! session.use_web_wallet()?;
//! let user = session.connect_user().await?;
//! println!("{} holds {} ALGO and {} assets", user.address, user.balance, user.assets.len());
//! ```

// Public modules
pub mod config;
pub mod constants;
pub mod error;
pub mod networks;
pub mod session;
pub mod stdlib;
pub mod storage;
pub mod wallets;

// Re-exports for convenience
pub use config::SessionConfig;
pub use constants::{NetworkData, ProviderEnv};
pub use error::{SessionError, StorageError};
pub use networks::{
    create_connector_api, AccountRecord, AlgoConnector, AppsCount, Asset, AssetMetadata,
    ChainConnector, IndexerClient, LoadedAssets, TransactionPage, TransactionQuery,
};
pub use session::{ConnectedUserData, Session, SessionStatus};
pub use stdlib::{
    Account, AlgoStdlib, Stdlib, WalletClientOpts, WalletFallback, WalletKind,
};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use wallets::{StaticWalletProvider, WalletConnectProvider, WalletProvider};

// Common result type
pub type Result<T> = std::result::Result<T, SessionError>;
