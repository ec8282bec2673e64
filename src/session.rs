//! Session orchestration
//!
//! Mediates between a caller and the wallet/chain backends: installs wallet
//! fallbacks, connects and reconnects users, hydrates account summaries and
//! tracks the persisted session keys. Holds no chain-specific logic.

use serde::Serialize;
use std::sync::Arc;

use crate::config::SessionConfig;
use crate::constants::{
    self, NetworkData, DEFAULT_NETWORK, NETWORK_STORAGE_KEY, USER_STORAGE_KEY,
    WALLETCONNECT_STORAGE_KEY,
};
use crate::error::SessionError;
use crate::networks::{self, AppsCount, AssetMetadata, ChainConnector};
use crate::stdlib::{Account, AlgoStdlib, Stdlib, WalletClientOpts};
use crate::storage::{self, Storage};
use crate::wallets::{WalletConnectProvider, WalletConnectSession, WalletProvider};
use crate::Result;

/// Result of inspecting the persisted session keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub exists: bool,
    pub is_wc_session: bool,
    pub addr: Option<String>,
}

/// A connected account with its balance and holdings
#[derive(Debug, Clone, Serialize)]
pub struct ConnectedUserData {
    pub account: Account,
    pub address: String,
    /// Network-token balance as a decimal string
    pub balance: String,
    pub apps_count: AppsCount,
    pub assets: Vec<AssetMetadata>,
}

type ReloadHook = Box<dyn Fn() + Send + Sync>;

pub struct Session {
    storage: Arc<dyn Storage>,
    stdlib: Arc<dyn Stdlib>,
    connector: Arc<dyn ChainConnector>,
    reload_hook: Option<ReloadHook>,
}

impl Session {
    pub fn new(
        storage: Arc<dyn Storage>,
        stdlib: Arc<dyn Stdlib>,
        connector: Arc<dyn ChainConnector>,
    ) -> Self {
        Self {
            storage,
            stdlib,
            connector,
            reload_hook: None,
        }
    }

    /// Wire up an Algorand session from configuration
    ///
    /// Storage is resolved from `config`; the WalletConnect provider reads its
    /// session from that storage. The network comes from the `active-chain`
    /// key, defaulting to ALGO.
    pub fn algorand(config: &SessionConfig, web_wallet: Arc<dyn WalletProvider>) -> Result<Self> {
        let storage = storage::resolve_storage(config);
        let network = active_network_in(storage.as_ref())?;

        let wallet_connect: Arc<dyn WalletProvider> =
            Arc::new(WalletConnectProvider::new(storage.clone()));
        let connector =
            networks::create_connector_api(network.abbr, config, web_wallet, wallet_connect)?;
        let stdlib = Arc::new(AlgoStdlib::new(
            networks::IndexerClient::from_config(config),
            network,
            config.provider_env,
        ));

        log::info!(
            "Session ready for {} on {}",
            network.name,
            config.provider_env
        );
        Ok(Self::new(storage, stdlib, connector))
    }

    /// Run `hook` after a disconnect clears the session keys
    pub fn with_reload_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.reload_hook = Some(Box::new(hook));
        self
    }

    /// Network selected by the `active-chain` key
    pub fn active_network(&self) -> Result<&'static NetworkData> {
        active_network_in(self.storage.as_ref())
    }

    /// Resolve accounts through the chain's web wallet from now on
    pub fn use_web_wallet(&self) -> Result<()> {
        self.storage.remove_item(WALLETCONNECT_STORAGE_KEY)?;
        self.set_lib_fallback(self.connector.get_web_wallet_client_opts());
        Ok(())
    }

    /// Resolve accounts through WalletConnect from now on
    pub fn use_wallet_connect(&self) -> Result<()> {
        self.storage.remove_item(USER_STORAGE_KEY)?;
        self.set_lib_fallback(self.connector.get_wallet_connect_client_opts());
        Ok(())
    }

    fn set_lib_fallback(&self, opts: WalletClientOpts) {
        let default_env = self.connector.get_provider_env(self.stdlib.connector());
        let provider_env = opts.provider_env.unwrap_or(default_env);
        let fallback = self.stdlib.wallet_fallback(WalletClientOpts {
            provider_env: Some(provider_env),
            ..opts
        });
        self.stdlib.set_wallet_fallback(fallback);
    }

    /// Connect the default account of the installed fallback
    pub async fn connect_user(&self) -> Result<ConnectedUserData> {
        let account = self.stdlib.get_default_account().await?;
        self.hydrate_user(account).await
    }

    /// Inspect the persisted session keys without touching any backend
    ///
    /// A plain `user` address takes precedence over the first WalletConnect
    /// account when both are stored.
    pub fn check_session_exists(&self) -> Result<SessionStatus> {
        let wc = non_empty(self.storage.get_item(WALLETCONNECT_STORAGE_KEY)?);
        let user = non_empty(self.storage.get_item(USER_STORAGE_KEY)?);

        let mut addr = wc
            .as_deref()
            .and_then(WalletConnectSession::parse)
            .and_then(|session| session.first_account().map(str::to_string));
        if let Some(user) = &user {
            addr = Some(user.clone());
        }

        Ok(SessionStatus {
            exists: user.is_some() || wc.is_some(),
            is_wc_session: wc.is_some(),
            addr,
        })
    }

    /// End the wallet session and clear both session keys
    pub async fn disconnect_user(&self) -> Result<()> {
        self.connector.disconnect_user().await?;
        self.storage.remove_item(USER_STORAGE_KEY)?;
        self.storage.remove_item(WALLETCONNECT_STORAGE_KEY)?;
        log::info!("User session cleared");

        if let Some(reload) = &self.reload_hook {
            reload();
        }
        Ok(())
    }

    /// Restore a session
    ///
    /// With an address the web wallet reconnects it; without one the
    /// WalletConnect session supplies the default account.
    pub async fn reconnect_user(&self, addr: Option<&str>) -> Result<ConnectedUserData> {
        let account = match addr.filter(|a| !a.is_empty()) {
            Some(addr) => {
                self.use_web_wallet()?;
                self.stdlib.connect_account(addr).await?
            }
            None => {
                self.use_wallet_connect()?;
                self.stdlib.get_default_account().await?
            }
        };
        self.hydrate_user(account).await
    }

    /// Fetch balance and holdings concurrently, then persist the address
    pub async fn hydrate_user(&self, account: Account) -> Result<ConnectedUserData> {
        let address = self.stdlib.format_address(account.address())?;

        let (balance, loaded) = tokio::try_join!(
            self.stdlib.balance_of(&account),
            self.connector.load_assets(&address),
        )?;

        self.persist_user(&address)?;

        Ok(ConnectedUserData {
            account,
            address,
            balance,
            apps_count: loaded.apps_count,
            assets: loaded.assets,
        })
    }

    // WalletConnect sessions are never re-persisted as plain addresses
    fn persist_user(&self, addr: &str) -> Result<()> {
        if non_empty(self.storage.get_item(WALLETCONNECT_STORAGE_KEY)?).is_some() {
            return Ok(());
        }
        self.storage.set_item(USER_STORAGE_KEY, addr)?;
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn active_network_in(storage: &dyn Storage) -> Result<&'static NetworkData> {
    let abbr = non_empty(storage.get_item(NETWORK_STORAGE_KEY)?)
        .unwrap_or_else(|| DEFAULT_NETWORK.to_string());
    constants::network(&abbr).ok_or(SessionError::UnsupportedChain(abbr))
}
