//! Chain connectors
//!
//! Every supported chain implements [`ChainConnector`]; the session only
//! talks to this trait. Algorand is the one implementation.

pub mod algo;
pub mod types;

pub use algo::{AlgoConnector, IndexerClient};
pub use types::{
    AccountRecord, AppsCount, Asset, AssetHolding, AssetMetadata, AssetParams, CreatedApp,
    LoadedAssets, TransactionPage, TransactionQuery,
};

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::SessionConfig;
use crate::constants::{self, ProviderEnv};
use crate::error::SessionError;
use crate::stdlib::WalletClientOpts;
use crate::wallets::WalletProvider;
use crate::Result;

/// Chain-specific operations the session delegates to
#[async_trait]
pub trait ChainConnector: Send + Sync {
    /// Raw account record
    async fn fetch_account(&self, address: &str) -> Result<AccountRecord>;

    /// Asset definition enriched with the held `amount`
    async fn fetch_asset_by_id(&self, id: u64, amount: u64) -> Result<AssetMetadata>;

    async fn search_assets_by_name(&self, name: &str) -> Result<Vec<Asset>>;

    async fn search_for_transactions(&self, query: &TransactionQuery) -> Result<TransactionPage>;

    /// Created-apps count plus metadata for every held asset, in holding order
    async fn load_assets(&self, address: &str) -> Result<LoadedAssets>;

    /// Environment for a stdlib connector name
    fn get_provider_env(&self, connector: &str) -> ProviderEnv;

    fn get_web_wallet_client_opts(&self) -> WalletClientOpts;

    fn get_wallet_connect_client_opts(&self) -> WalletClientOpts;

    /// End wallet-provider sessions
    async fn disconnect_user(&self) -> Result<()>;
}

/// Build the connector for a network abbreviation from the registry
pub fn create_connector_api(
    abbr: &str,
    config: &SessionConfig,
    web_wallet: Arc<dyn WalletProvider>,
    wallet_connect: Arc<dyn WalletProvider>,
) -> Result<Arc<dyn ChainConnector>> {
    let network = constants::network(abbr)
        .ok_or_else(|| SessionError::UnsupportedChain(abbr.to_string()))?;

    match network.abbr {
        algo::CONNECTOR => {
            log::debug!(
                "Creating {} connector ({}) against {}",
                network.name,
                config.provider_env,
                config.indexer_url
            );
            Ok(Arc::new(AlgoConnector::new(
                IndexerClient::from_config(config),
                config.provider_env,
                web_wallet,
                wallet_connect,
            )))
        }
        other => Err(SessionError::UnsupportedChain(other.to_string())),
    }
}
