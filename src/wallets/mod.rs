//! Wallet providers a stdlib fallback resolves accounts through
//!
//! - `WalletConnectProvider`: accounts from the paired session blob
//! - `StaticWalletProvider`: a web wallet exposing a fixed address list

mod static_wallet;
mod walletconnect;

pub use static_wallet::StaticWalletProvider;
pub use walletconnect::{WalletConnectProvider, WalletConnectSession};

use async_trait::async_trait;

use crate::constants::ProviderEnv;
use crate::Result;

/// A source of user-approved account addresses
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Human-readable provider name used in logs
    fn name(&self) -> &str;

    /// Addresses the user has authorised, most relevant first
    async fn accounts(&self, provider_env: ProviderEnv) -> Result<Vec<String>>;

    /// End the provider session
    async fn disconnect(&self) -> Result<()>;
}
