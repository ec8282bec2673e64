//! Common test utilities for wallet session integration tests
//!
//! - Logger setup
//! - Deterministic Algorand addresses
//! - Scriptable stdlib and connector fakes for orchestration tests
//! - Indexer mock bootstrap

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use indexer_mock::{spawn_server, IndexerStore};
use wallet_session::networks::{Asset, TransactionPage, TransactionQuery};
use wallet_session::stdlib::encode_address;
use wallet_session::{
    Account, AccountRecord, AppsCount, AssetMetadata, ChainConnector, LoadedAssets, ProviderEnv,
    SessionError, StaticWalletProvider, Stdlib, WalletClientOpts, WalletFallback, WalletKind,
    WalletProvider,
};

/// Load `.env` (for RUST_LOG overrides) and initialize logging
///
/// Only the first call installs the logger; later calls are no-ops.
pub fn init_logger() {
    let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push(".env");
    dotenv::from_path(&path).ok();

    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .try_init();
}

/// Valid Algorand address derived from a one-byte seed
pub fn test_address(seed: u8) -> String {
    encode_address(&[seed; 32])
}

/// Start an indexer mock on an ephemeral port
pub async fn start_indexer() -> anyhow::Result<(Arc<IndexerStore>, String)> {
    let store = Arc::new(IndexerStore::default());
    store.set_current_round(1_000);
    let url = spawn_server(store.clone()).await?;
    log::info!("📡 Indexer mock at {}", url);
    Ok((store, url))
}

// ============================================================================
// Fakes
// ============================================================================

/// Stdlib fake resolving a fixed default account
pub struct FakeStdlib {
    pub default_account: String,
    pub balance: String,
    pub fail_balance: bool,
    pub reject_connect: bool,
    pub fallback: Mutex<Option<WalletFallback>>,
    pub connected: Mutex<Vec<String>>,
}

impl FakeStdlib {
    pub fn new(default_account: &str) -> Self {
        Self {
            default_account: default_account.to_string(),
            balance: "12.5".to_string(),
            fail_balance: false,
            reject_connect: false,
            fallback: Mutex::new(None),
            connected: Mutex::new(Vec::new()),
        }
    }

    pub fn installed_kind(&self) -> Option<WalletKind> {
        self.fallback.lock().unwrap().as_ref().map(|f| f.kind)
    }

    pub fn installed_env(&self) -> Option<ProviderEnv> {
        self.fallback.lock().unwrap().as_ref().map(|f| f.provider_env)
    }
}

#[async_trait]
impl Stdlib for FakeStdlib {
    fn connector(&self) -> &str {
        "ALGO"
    }

    async fn get_default_account(&self) -> wallet_session::Result<Account> {
        if self.reject_connect {
            return Err(SessionError::Wallet("user rejected the request".to_string()));
        }
        let kind = self
            .installed_kind()
            .ok_or(SessionError::NoWalletFallback)?;
        Ok(Account::new(self.default_account.clone(), Some(kind)))
    }

    async fn connect_account(&self, addr: &str) -> wallet_session::Result<Account> {
        self.connected.lock().unwrap().push(addr.to_string());
        Ok(Account::new(addr, self.installed_kind()))
    }

    async fn balance_of(&self, _account: &Account) -> wallet_session::Result<String> {
        if self.fail_balance {
            return Err(SessionError::Indexer("balance unavailable".to_string()));
        }
        Ok(self.balance.clone())
    }

    fn format_address(&self, address: &str) -> wallet_session::Result<String> {
        Ok(address.trim().to_string())
    }

    fn wallet_fallback(&self, opts: WalletClientOpts) -> WalletFallback {
        WalletFallback {
            kind: opts.kind,
            provider_env: opts.provider_env.unwrap_or_default(),
            provider: opts.provider,
        }
    }

    fn set_wallet_fallback(&self, fallback: WalletFallback) {
        *self.fallback.lock().unwrap() = Some(fallback);
    }
}

/// Connector fake with canned holdings
pub struct FakeConnector {
    pub provider_env: ProviderEnv,
    pub fail_assets: bool,
    pub disconnects: AtomicUsize,
    pub loaded_for: Mutex<Vec<String>>,
    web_wallet: Arc<dyn WalletProvider>,
    wallet_connect: Arc<dyn WalletProvider>,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self {
            provider_env: ProviderEnv::MainNet,
            fail_assets: false,
            disconnects: AtomicUsize::new(0),
            loaded_for: Mutex::new(Vec::new()),
            web_wallet: Arc::new(StaticWalletProvider::new("web", Vec::new())),
            wallet_connect: Arc::new(StaticWalletProvider::new("wc", Vec::new())),
        }
    }

    pub fn disconnect_count(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }
}

pub fn gold_asset(amount: u64) -> AssetMetadata {
    AssetMetadata {
        id: 7,
        name: Some("Gold".to_string()),
        unit_name: Some("GOLD".to_string()),
        decimals: 2,
        total: 1_000,
        creator: "CREATOR".to_string(),
        url: None,
        amount,
    }
}

#[async_trait]
impl ChainConnector for FakeConnector {
    async fn fetch_account(&self, address: &str) -> wallet_session::Result<AccountRecord> {
        Ok(AccountRecord {
            address: address.to_string(),
            ..Default::default()
        })
    }

    async fn fetch_asset_by_id(
        &self,
        _id: u64,
        amount: u64,
    ) -> wallet_session::Result<AssetMetadata> {
        Ok(gold_asset(amount))
    }

    async fn search_assets_by_name(&self, _name: &str) -> wallet_session::Result<Vec<Asset>> {
        Ok(Vec::new())
    }

    async fn search_for_transactions(
        &self,
        _query: &TransactionQuery,
    ) -> wallet_session::Result<TransactionPage> {
        Ok(TransactionPage::default())
    }

    async fn load_assets(&self, address: &str) -> wallet_session::Result<LoadedAssets> {
        self.loaded_for.lock().unwrap().push(address.to_string());
        if self.fail_assets {
            return Err(SessionError::Indexer("asset lookup failed".to_string()));
        }
        Ok(LoadedAssets {
            apps_count: AppsCount::new(1),
            assets: vec![gold_asset(3)],
        })
    }

    fn get_provider_env(&self, _connector: &str) -> ProviderEnv {
        self.provider_env
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

    async fn disconnect_user(&self) -> wallet_session::Result<()> {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
