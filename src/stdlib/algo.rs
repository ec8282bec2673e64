use async_trait::async_trait;
use std::sync::RwLock;

use super::{address, currency, Account, Stdlib, WalletClientOpts, WalletFallback};
use crate::constants::{NetworkData, ProviderEnv};
use crate::error::SessionError;
use crate::networks::algo::IndexerClient;
use crate::Result;

/// Algorand stdlib facade
///
/// Balances are read from the indexer; accounts are resolved through the
/// installed wallet fallback.
pub struct AlgoStdlib {
    indexer: IndexerClient,
    network: &'static NetworkData,
    provider_env: ProviderEnv,
    fallback: RwLock<Option<WalletFallback>>,
}

impl AlgoStdlib {
    pub fn new(
        indexer: IndexerClient,
        network: &'static NetworkData,
        provider_env: ProviderEnv,
    ) -> Self {
        Self {
            indexer,
            network,
            provider_env,
            fallback: RwLock::new(None),
        }
    }

    /// Currently installed fallback
    pub fn installed_fallback(&self) -> Option<WalletFallback> {
        match self.fallback.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Stdlib for AlgoStdlib {
    fn connector(&self) -> &str {
        self.network.abbr
    }

    async fn get_default_account(&self) -> Result<Account> {
        let fallback = self
            .installed_fallback()
            .ok_or(SessionError::NoWalletFallback)?;

        log::debug!(
            "Requesting default account from {} ({})",
            fallback.provider.name(),
            fallback.provider_env
        );
        let accounts = fallback.provider.accounts(fallback.provider_env).await?;
        let first = accounts
            .first()
            .ok_or_else(|| SessionError::NoAccounts(fallback.provider.name().to_string()))?;

        let addr = address::format_address(first)?;
        log::info!("Connected default account {}", addr);
        Ok(Account::new(addr, Some(fallback.kind)))
    }

    async fn connect_account(&self, addr: &str) -> Result<Account> {
        let addr = address::format_address(addr)?;
        let wallet = self.installed_fallback().map(|f| f.kind);
        log::info!("Connected account {}", addr);
        Ok(Account::new(addr, wallet))
    }

    async fn balance_of(&self, account: &Account) -> Result<String> {
        let record = self.indexer.fetch_account(account.address()).await?;
        Ok(currency::format_currency(record.amount, self.network.decimals))
    }

    fn format_address(&self, address: &str) -> Result<String> {
        address::format_address(address)
    }

    fn wallet_fallback(&self, opts: WalletClientOpts) -> WalletFallback {
        WalletFallback {
            kind: opts.kind,
            provider_env: opts.provider_env.unwrap_or(self.provider_env),
            provider: opts.provider,
        }
    }

    fn set_wallet_fallback(&self, fallback: WalletFallback) {
        log::debug!("Installing {:?} wallet fallback", fallback.kind);
        match self.fallback.write() {
            Ok(mut guard) => *guard = Some(fallback),
            Err(poisoned) => *poisoned.into_inner() = Some(fallback),
        }
    }
}
