//! Indexer API response types and fixture builders
//!
//! Responses mirror the indexer's kebab-case JSON so clients consume them
//! unchanged. Account, asset and transaction bodies are kept as raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};

/// Fixture set the mock serves
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Fixtures {
    /// Address → account object
    #[serde(default)]
    pub accounts: HashMap<String, Value>,
    /// Asset id → asset object (`index`, `params`)
    #[serde(default)]
    pub assets: BTreeMap<u64, Value>,
    #[serde(default)]
    pub transactions: Vec<Value>,
    #[serde(default)]
    pub current_round: u64,
}

/// Response from /v2/accounts/{address}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AccountResponse {
    pub account: Value,
    pub current_round: u64,
}

/// Response from /v2/assets/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AssetResponse {
    pub asset: Value,
    pub current_round: u64,
}

/// Response from /v2/assets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AssetsResponse {
    pub assets: Vec<Value>,
    pub current_round: u64,
}

/// Response from /v2/transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransactionsResponse {
    pub transactions: Vec<Value>,
    pub current_round: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Query parameters accepted by /v2/transactions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransactionFilter {
    pub address: Option<String>,
    pub asset_id: Option<u64>,
    pub min_round: Option<u64>,
    pub max_round: Option<u64>,
    pub limit: Option<usize>,
    pub next: Option<String>,
}

/// Query parameters accepted by /v2/assets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetSearch {
    pub name: Option<String>,
}

/// Response from /health
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HealthResponse {
    pub round: u64,
    pub db_available: bool,
    pub is_migrating: bool,
}

/// Build an account fixture
///
/// `holdings` are `(asset-id, amount)` pairs; created apps get sequential ids.
pub fn account_json(
    address: &str,
    amount: u64,
    holdings: &[(u64, u64)],
    created_apps: usize,
) -> Value {
    let assets: Vec<Value> = holdings
        .iter()
        .map(|(id, amount)| json!({ "asset-id": id, "amount": amount, "is-frozen": false }))
        .collect();
    let apps: Vec<Value> = (0..created_apps)
        .map(|i| json!({ "id": 1000 + i as u64, "deleted": false }))
        .collect();

    json!({
        "address": address,
        "amount": amount,
        "assets": assets,
        "created-apps": apps,
        "created-assets": [],
        "status": "Offline",
    })
}

/// Build an asset fixture
pub fn asset_json(
    id: u64,
    name: &str,
    unit_name: &str,
    decimals: u32,
    total: u64,
    creator: &str,
) -> Value {
    json!({
        "index": id,
        "deleted": false,
        "params": {
            "creator": creator,
            "decimals": decimals,
            "total": total,
            "name": name,
            "unit-name": unit_name,
            "url": format!("https://example.org/assets/{}", id),
        },
    })
}

/// Build a payment transaction fixture
pub fn payment_json(id: &str, sender: &str, receiver: &str, amount: u64, round: u64) -> Value {
    json!({
        "id": id,
        "sender": sender,
        "confirmed-round": round,
        "tx-type": "pay",
        "payment-transaction": { "receiver": receiver, "amount": amount },
    })
}

/// Build an asset transfer transaction fixture
pub fn asset_transfer_json(
    id: &str,
    sender: &str,
    receiver: &str,
    asset_id: u64,
    amount: u64,
    round: u64,
) -> Value {
    json!({
        "id": id,
        "sender": sender,
        "confirmed-round": round,
        "tx-type": "axfer",
        "asset-transfer-transaction": {
            "receiver": receiver,
            "asset-id": asset_id,
            "amount": amount,
        },
    })
}
