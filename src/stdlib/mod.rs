//! Blockchain SDK facade
//!
//! - `Stdlib` trait the session drives (accounts, balances, fallbacks)
//! - Algorand implementation over the indexer
//! - Address and currency formatting helpers

pub mod address;
mod algo;
pub mod currency;

pub use address::{decode_address, encode_address, format_address};
pub use algo::AlgoStdlib;
pub use currency::format_currency;

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::constants::ProviderEnv;
use crate::wallets::WalletProvider;
use crate::Result;

/// Which kind of wallet a fallback resolves accounts through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WalletKind {
    WebWallet,
    WalletConnect,
}

/// Handle to a connected wallet account
///
/// Owned by the stdlib; callers only read its address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    address: String,
    wallet: Option<WalletKind>,
}

impl Account {
    pub fn new(address: impl Into<String>, wallet: Option<WalletKind>) -> Self {
        Self {
            address: address.into(),
            wallet,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Wallet the account was resolved through, if any
    pub fn wallet(&self) -> Option<WalletKind> {
        self.wallet
    }
}

/// Client options a chain connector hands out for a wallet kind
#[derive(Clone)]
pub struct WalletClientOpts {
    pub kind: WalletKind,
    /// Overrides the connector's default environment when set
    pub provider_env: Option<ProviderEnv>,
    pub provider: Arc<dyn WalletProvider>,
}

impl fmt::Debug for WalletClientOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletClientOpts")
            .field("kind", &self.kind)
            .field("provider_env", &self.provider_env)
            .field("provider", &self.provider.name())
            .finish()
    }
}

/// Account-resolution fallback installed into the stdlib
#[derive(Clone)]
pub struct WalletFallback {
    pub kind: WalletKind,
    pub provider_env: ProviderEnv,
    pub provider: Arc<dyn WalletProvider>,
}

impl fmt::Debug for WalletFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletFallback")
            .field("kind", &self.kind)
            .field("provider_env", &self.provider_env)
            .field("provider", &self.provider.name())
            .finish()
    }
}

/// Operations the session needs from the blockchain SDK
#[async_trait]
pub trait Stdlib: Send + Sync {
    /// Name of the active connector (e.g. "ALGO")
    fn connector(&self) -> &str;

    /// Resolve the default account through the installed fallback
    async fn get_default_account(&self) -> Result<Account>;

    /// Connect a specific address
    async fn connect_account(&self, addr: &str) -> Result<Account>;

    /// Network-token balance as a decimal string
    async fn balance_of(&self, account: &Account) -> Result<String>;

    fn format_address(&self, address: &str) -> Result<String>;

    /// Build a fallback from client options
    fn wallet_fallback(&self, opts: WalletClientOpts) -> WalletFallback;

    /// Install the fallback used by `get_default_account`
    fn set_wallet_fallback(&self, fallback: WalletFallback);
}
