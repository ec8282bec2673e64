//! Session Orchestration Tests
//!
//! Exercises session-key precedence, fallback installation, hydration and
//! disconnect against in-process stdlib/connector fakes.
//!
//! These tests are self-contained and do not require an indexer.
//!
//! Run with: cargo test --test session_test -- --nocapture

mod common;

use common::{init_logger, FakeConnector, FakeStdlib};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wallet_session::{
    Account, MemoryStorage, ProviderEnv, Session, SessionError, SessionStatus, Storage, WalletKind,
};

const USER: &str = "user";
const WALLETCONNECT: &str = "walletconnect";

// ============================================================================
// Helper Functions
// ============================================================================

struct Harness {
    storage: Arc<MemoryStorage>,
    stdlib: Arc<FakeStdlib>,
    connector: Arc<FakeConnector>,
    session: Session,
}

fn harness_with(stdlib: FakeStdlib, connector: FakeConnector) -> Harness {
    init_logger();
    let storage = Arc::new(MemoryStorage::new());
    let stdlib = Arc::new(stdlib);
    let connector = Arc::new(connector);
    let session = Session::new(storage.clone(), stdlib.clone(), connector.clone());
    Harness {
        storage,
        stdlib,
        connector,
        session,
    }
}

fn harness() -> Harness {
    harness_with(FakeStdlib::new("DEFAULT"), FakeConnector::new())
}

// ============================================================================
// Session Existence
// ============================================================================

#[test]
fn test_session_with_plain_user_only() {
    let h = harness();
    h.storage.set_item(USER, "ADDR1").unwrap();

    assert_eq!(
        h.session.check_session_exists().unwrap(),
        SessionStatus {
            exists: true,
            is_wc_session: false,
            addr: Some("ADDR1".to_string()),
        }
    );
}

#[test]
fn test_session_with_walletconnect_only() {
    let h = harness();
    h.storage
        .set_item(WALLETCONNECT, r#"{"accounts":["ADDR2"],"connected":true}"#)
        .unwrap();

    assert_eq!(
        h.session.check_session_exists().unwrap(),
        SessionStatus {
            exists: true,
            is_wc_session: true,
            addr: Some("ADDR2".to_string()),
        }
    );
}

#[test]
fn test_plain_user_overrides_walletconnect_address() {
    let h = harness();
    h.storage.set_item(USER, "ADDR1").unwrap();
    h.storage
        .set_item(WALLETCONNECT, r#"{"accounts":["ADDR2"]}"#)
        .unwrap();

    let status = h.session.check_session_exists().unwrap();
    assert!(status.exists);
    assert!(status.is_wc_session);
    assert_eq!(status.addr.as_deref(), Some("ADDR1"));
}

#[test]
fn test_no_session() {
    let h = harness();
    assert_eq!(
        h.session.check_session_exists().unwrap(),
        SessionStatus {
            exists: false,
            is_wc_session: false,
            addr: None,
        }
    );
}

#[test]
fn test_walletconnect_blob_without_accounts() {
    let h = harness();
    h.storage.set_item(WALLETCONNECT, "not json").unwrap();

    let status = h.session.check_session_exists().unwrap();
    assert!(status.exists);
    assert!(status.is_wc_session);
    assert_eq!(status.addr, None);

    h.storage.set_item(WALLETCONNECT, r#"{"accounts":[]}"#).unwrap();
    assert_eq!(h.session.check_session_exists().unwrap().addr, None);
}

#[test]
fn test_empty_values_do_not_count() {
    let h = harness();
    h.storage.set_item(USER, "").unwrap();
    h.storage.set_item(WALLETCONNECT, "").unwrap();

    assert!(!h.session.check_session_exists().unwrap().exists);
}

// ============================================================================
// Wallet Fallbacks
// ============================================================================

#[test]
fn test_use_web_wallet_clears_walletconnect() {
    let h = harness();
    h.storage.set_item(USER, "ADDR1").unwrap();
    h.storage.set_item(WALLETCONNECT, "{}").unwrap();

    h.session.use_web_wallet().unwrap();

    assert_eq!(h.storage.get_item(WALLETCONNECT).unwrap(), None);
    assert_eq!(h.storage.get_item(USER).unwrap().as_deref(), Some("ADDR1"));
    assert_eq!(h.stdlib.installed_kind(), Some(WalletKind::WebWallet));
    // Environment comes from the connector when the options leave it unset
    assert_eq!(h.stdlib.installed_env(), Some(ProviderEnv::MainNet));
}

#[test]
fn test_use_wallet_connect_clears_user() {
    let h = harness();
    h.storage.set_item(USER, "ADDR1").unwrap();
    h.storage.set_item(WALLETCONNECT, "{}").unwrap();

    h.session.use_wallet_connect().unwrap();

    assert_eq!(h.storage.get_item(USER).unwrap(), None);
    assert_eq!(h.storage.get_item(WALLETCONNECT).unwrap().as_deref(), Some("{}"));
    assert_eq!(h.stdlib.installed_kind(), Some(WalletKind::WalletConnect));
}

// ============================================================================
// Connect / Reconnect
// ============================================================================

#[tokio::test]
async fn test_connect_user_hydrates_and_persists() {
    let h = harness();
    h.session.use_web_wallet().unwrap();

    let user = h.session.connect_user().await.unwrap();

    assert_eq!(user.address, "DEFAULT");
    assert_eq!(user.balance, "12.5");
    assert_eq!(user.apps_count.description, "1 app created");
    assert_eq!(user.assets.len(), 1);
    assert_eq!(user.account.wallet(), Some(WalletKind::WebWallet));
    assert_eq!(h.storage.get_item(USER).unwrap().as_deref(), Some("DEFAULT"));
    assert_eq!(*h.connector.loaded_for.lock().unwrap(), vec!["DEFAULT"]);
}

#[tokio::test]
async fn test_connect_user_propagates_wallet_errors() {
    let mut stdlib = FakeStdlib::new("DEFAULT");
    stdlib.reject_connect = true;
    let h = harness_with(stdlib, FakeConnector::new());
    h.session.use_web_wallet().unwrap();

    match h.session.connect_user().await {
        Err(SessionError::Wallet(msg)) => assert_eq!(msg, "user rejected the request"),
        other => panic!("expected wallet rejection, got {:?}", other.map(|u| u.address)),
    }
    assert_eq!(h.storage.get_item(USER).unwrap(), None);
}

#[tokio::test]
async fn test_connect_user_without_fallback_fails() {
    let h = harness();
    assert!(matches!(
        h.session.connect_user().await,
        Err(SessionError::NoWalletFallback)
    ));
}

#[tokio::test]
async fn test_reconnect_with_address_uses_web_wallet() {
    let h = harness();
    h.storage.set_item(WALLETCONNECT, r#"{"accounts":["WC"]}"#).unwrap();

    let user = h.session.reconnect_user(Some("ADDR1")).await.unwrap();

    assert_eq!(user.address, "ADDR1");
    assert_eq!(h.stdlib.installed_kind(), Some(WalletKind::WebWallet));
    assert_eq!(*h.stdlib.connected.lock().unwrap(), vec!["ADDR1"]);
    assert_eq!(h.storage.get_item(WALLETCONNECT).unwrap(), None);
    assert_eq!(h.storage.get_item(USER).unwrap().as_deref(), Some("ADDR1"));
}

#[tokio::test]
async fn test_reconnect_without_address_uses_walletconnect() {
    let h = harness();
    h.storage.set_item(USER, "STALE").unwrap();
    h.storage.set_item(WALLETCONNECT, r#"{"accounts":["DEFAULT"]}"#).unwrap();

    let user = h.session.reconnect_user(None).await.unwrap();

    assert_eq!(user.address, "DEFAULT");
    assert_eq!(h.stdlib.installed_kind(), Some(WalletKind::WalletConnect));
    assert!(h.stdlib.connected.lock().unwrap().is_empty());
    // WalletConnect sessions are not re-persisted as plain addresses
    assert_eq!(h.storage.get_item(USER).unwrap(), None);
}

#[tokio::test]
async fn test_reconnect_with_empty_address_uses_walletconnect() {
    let h = harness();
    h.session.reconnect_user(Some("")).await.unwrap();
    assert_eq!(h.stdlib.installed_kind(), Some(WalletKind::WalletConnect));
}

// ============================================================================
// Hydration
// ============================================================================

#[tokio::test]
async fn test_hydrate_skips_persist_for_walletconnect_session() {
    let h = harness();
    h.storage
        .set_item(WALLETCONNECT, r#"{"accounts":["ADDR2"]}"#)
        .unwrap();

    let user = h
        .session
        .hydrate_user(Account::new("ADDR2", Some(WalletKind::WalletConnect)))
        .await
        .unwrap();

    assert_eq!(user.address, "ADDR2");
    assert_eq!(h.storage.get_item(USER).unwrap(), None);
}

#[tokio::test]
async fn test_hydrate_fails_when_balance_fails() {
    let mut stdlib = FakeStdlib::new("DEFAULT");
    stdlib.fail_balance = true;
    let h = harness_with(stdlib, FakeConnector::new());

    let result = h.session.hydrate_user(Account::new("ADDR1", None)).await;

    assert!(matches!(result, Err(SessionError::Indexer(ref m)) if m == "balance unavailable"));
    assert_eq!(h.storage.get_item(USER).unwrap(), None);
}

#[tokio::test]
async fn test_hydrate_fails_when_assets_fail() {
    let mut connector = FakeConnector::new();
    connector.fail_assets = true;
    let h = harness_with(FakeStdlib::new("DEFAULT"), connector);

    let result = h.session.hydrate_user(Account::new("ADDR1", None)).await;

    assert!(matches!(result, Err(SessionError::Indexer(ref m)) if m == "asset lookup failed"));
    assert_eq!(h.storage.get_item(USER).unwrap(), None);
}

// ============================================================================
// Disconnect
// ============================================================================

#[tokio::test]
async fn test_disconnect_clears_both_keys_and_reloads() {
    init_logger();
    let storage = Arc::new(MemoryStorage::new());
    let connector = Arc::new(FakeConnector::new());
    let reloads = Arc::new(AtomicUsize::new(0));
    let counter = reloads.clone();

    let session = Session::new(
        storage.clone(),
        Arc::new(FakeStdlib::new("DEFAULT")),
        connector.clone(),
    )
    .with_reload_hook(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    storage.set_item(USER, "ADDR1").unwrap();
    storage.set_item(WALLETCONNECT, r#"{"accounts":["ADDR2"]}"#).unwrap();
    storage.set_item("active-chain", "ALGO").unwrap();

    session.disconnect_user().await.unwrap();

    assert_eq!(storage.get_item(USER).unwrap(), None);
    assert_eq!(storage.get_item(WALLETCONNECT).unwrap(), None);
    assert_eq!(storage.get_item("active-chain").unwrap().as_deref(), Some("ALGO"));
    assert_eq!(connector.disconnect_count(), 1);
    assert_eq!(reloads.load(Ordering::SeqCst), 1);
    assert!(!session.check_session_exists().unwrap().exists);
}

#[tokio::test]
async fn test_disconnect_without_session() {
    let h = harness();
    h.session.disconnect_user().await.unwrap();
    assert_eq!(h.connector.disconnect_count(), 1);
    assert!(!h.session.check_session_exists().unwrap().exists);
}

// ============================================================================
// Active Network
// ============================================================================

#[test]
fn test_active_network_defaults_to_algo() {
    let h = harness();
    assert_eq!(h.session.active_network().unwrap().abbr, "ALGO");

    h.storage.set_item("active-chain", "ETH").unwrap();
    assert_eq!(h.session.active_network().unwrap().decimals, 18);

    h.storage.set_item("active-chain", "DOGE").unwrap();
    assert!(matches!(
        h.session.active_network(),
        Err(SessionError::UnsupportedChain(_))
    ));
}
