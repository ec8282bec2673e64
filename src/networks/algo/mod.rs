//! Algorand chain connector
//!
//! Translates session needs into indexer queries and hands out the client
//! options for the web wallet and WalletConnect providers.

mod indexer;

pub use indexer::IndexerClient;

use async_trait::async_trait;
use futures::future::try_join_all;
use std::sync::Arc;

use super::types::{
    AccountRecord, AppsCount, Asset, AssetMetadata, LoadedAssets, TransactionPage,
    TransactionQuery,
};
use super::ChainConnector;
use crate::constants::ProviderEnv;
use crate::stdlib::{WalletClientOpts, WalletKind};
use crate::wallets::WalletProvider;
use crate::Result;

/// Connector name the stdlib reports for Algorand
pub const CONNECTOR: &str = "ALGO";

pub struct AlgoConnector {
    indexer: IndexerClient,
    provider_env: ProviderEnv,
    web_wallet: Arc<dyn WalletProvider>,
    wallet_connect: Arc<dyn WalletProvider>,
}

impl AlgoConnector {
    pub fn new(
        indexer: IndexerClient,
        provider_env: ProviderEnv,
        web_wallet: Arc<dyn WalletProvider>,
        wallet_connect: Arc<dyn WalletProvider>,
    ) -> Self {
        Self {
            indexer,
            provider_env,
            web_wallet,
            wallet_connect,
        }
    }
}

#[async_trait]
impl ChainConnector for AlgoConnector {
    async fn fetch_account(&self, address: &str) -> Result<AccountRecord> {
        self.indexer.fetch_account(address).await
    }

    async fn fetch_asset_by_id(&self, id: u64, amount: u64) -> Result<AssetMetadata> {
        let asset = self.indexer.fetch_asset(id).await?;
        Ok(AssetMetadata::from_asset(asset, amount))
    }

    async fn search_assets_by_name(&self, name: &str) -> Result<Vec<Asset>> {
        self.indexer.search_assets_by_name(name).await
    }

    async fn search_for_transactions(&self, query: &TransactionQuery) -> Result<TransactionPage> {
        self.indexer
            .search_for_transactions(&query.to_params())
            .await
    }

    async fn load_assets(&self, address: &str) -> Result<LoadedAssets> {
        let account = self.indexer.fetch_account(address).await?;
        let apps_count = AppsCount::new(account.created_apps.len());

        let assets = if account.assets.is_empty() {
            Vec::new()
        } else {
            let lookups = account
                .assets
                .iter()
                .map(|holding| self.fetch_asset_by_id(holding.asset_id, holding.amount));
            try_join_all(lookups).await?
        };

        log::debug!(
            "Loaded {} asset(s) for {} ({})",
            assets.len(),
            address,
            apps_count.description
        );

        Ok(LoadedAssets { apps_count, assets })
    }

    fn get_provider_env(&self, connector: &str) -> ProviderEnv {
        if connector == CONNECTOR {
            self.provider_env
        } else {
            ProviderEnv::TestNet
        }
    }

    fn get_web_wallet_client_opts(&self) -> WalletClientOpts {
        WalletClientOpts {
            kind: WalletKind::WebWallet,
            provider_env: None,
            provider: self.web_wallet.clone(),
        }
    }

    fn get_wallet_connect_client_opts(&self) -> WalletClientOpts {
        WalletClientOpts {
            kind: WalletKind::WalletConnect,
            provider_env: None,
            provider: self.wallet_connect.clone(),
        }
    }

    /// Disconnect both providers; the first failure is returned
    async fn disconnect_user(&self) -> Result<()> {
        let web = self.web_wallet.disconnect().await;
        let wc = self.wallet_connect.disconnect().await;
        if let Err(e) = &web {
            log::warn!("{} disconnect failed: {}", self.web_wallet.name(), e);
        }
        web.and(wc)
    }
}
