//! In-memory fixture store backing the mock
//!
//! Replaces a live indexer database: lookups read the fixtures, and counters
//! record how many per-entity lookups clients issued.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::types::{Fixtures, TransactionFilter};

#[derive(Debug, Default)]
pub struct IndexerStore {
    fixtures: RwLock<Fixtures>,
    account_lookups: AtomicUsize,
    asset_lookups: AtomicUsize,
}

impl IndexerStore {
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            fixtures: RwLock::new(fixtures),
            ..Default::default()
        }
    }

    /// Load fixtures from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixtures file {}", path.display()))?;
        let fixtures: Fixtures =
            serde_json::from_str(&contents).context("Invalid fixtures JSON")?;

        log::info!(
            "Loaded {} account(s), {} asset(s), {} transaction(s) from {}",
            fixtures.accounts.len(),
            fixtures.assets.len(),
            fixtures.transactions.len(),
            path.display()
        );
        Ok(Self::new(fixtures))
    }

    fn read(&self) -> RwLockReadGuard<'_, Fixtures> {
        self.fixtures.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Fixtures> {
        self.fixtures.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn current_round(&self) -> u64 {
        self.read().current_round
    }

    pub fn set_current_round(&self, round: u64) {
        self.write().current_round = round;
    }

    pub fn insert_account(&self, address: impl Into<String>, account: Value) {
        self.write().accounts.insert(address.into(), account);
    }

    pub fn insert_asset(&self, id: u64, asset: Value) {
        self.write().assets.insert(id, asset);
    }

    pub fn insert_transaction(&self, transaction: Value) {
        self.write().transactions.push(transaction);
    }

    pub fn account(&self, address: &str) -> Option<Value> {
        self.account_lookups.fetch_add(1, Ordering::SeqCst);
        self.read().accounts.get(address).cloned()
    }

    pub fn asset(&self, id: u64) -> Option<Value> {
        self.asset_lookups.fetch_add(1, Ordering::SeqCst);
        self.read().assets.get(&id).cloned()
    }

    /// Case-insensitive substring match on `params.name`
    pub fn search_assets(&self, name: Option<&str>) -> Vec<Value> {
        let needle = name.map(str::to_lowercase);
        self.read()
            .assets
            .values()
            .filter(|asset| match &needle {
                Some(needle) => asset["params"]["name"]
                    .as_str()
                    .map(|n| n.to_lowercase().contains(needle.as_str()))
                    .unwrap_or(false),
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Filter transactions; `next` is an offset token returned with the previous page
    pub fn search_transactions(&self, filter: &TransactionFilter) -> (Vec<Value>, Option<String>) {
        let matching: Vec<Value> = self
            .read()
            .transactions
            .iter()
            .filter(|tx| matches_filter(tx, filter))
            .cloned()
            .collect();

        let offset = filter
            .next
            .as_deref()
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(0);
        let limit = filter.limit.unwrap_or(matching.len()).max(1);

        let page: Vec<Value> = matching.iter().skip(offset).take(limit).cloned().collect();
        let consumed = offset + page.len();
        let next_token = (consumed < matching.len()).then(|| consumed.to_string());
        (page, next_token)
    }

    pub fn account_lookups(&self) -> usize {
        self.account_lookups.load(Ordering::SeqCst)
    }

    pub fn asset_lookups(&self) -> usize {
        self.asset_lookups.load(Ordering::SeqCst)
    }
}

fn matches_filter(tx: &Value, filter: &TransactionFilter) -> bool {
    if let Some(address) = &filter.address {
        let involved = [
            &tx["sender"],
            &tx["payment-transaction"]["receiver"],
            &tx["asset-transfer-transaction"]["receiver"],
        ]
        .iter()
        .any(|v| v.as_str() == Some(address.as_str()));
        if !involved {
            return false;
        }
    }

    if let Some(asset_id) = filter.asset_id {
        if tx["asset-transfer-transaction"]["asset-id"].as_u64() != Some(asset_id) {
            return false;
        }
    }

    let round = tx["confirmed-round"].as_u64().unwrap_or(0);
    if filter.min_round.map_or(false, |min| round < min) {
        return false;
    }
    if filter.max_round.map_or(false, |max| round > max) {
        return false;
    }
    true
}
