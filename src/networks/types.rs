//! Account, asset and transaction records returned by chain connectors
//!
//! Field names follow the indexer's kebab-case JSON. Records keep every
//! field the indexer sent: the ones read here are typed, the rest are
//! carried in `extra` and serialized back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account as reported by the indexer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AccountRecord {
    pub address: String,
    /// Network-token balance in base units
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub assets: Vec<AssetHolding>,
    #[serde(default)]
    pub created_apps: Vec<CreatedApp>,
    #[serde(default)]
    pub created_assets: Vec<Asset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An asset held by an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AssetHolding {
    pub asset_id: u64,
    pub amount: u64,
    #[serde(default)]
    pub is_frozen: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedApp {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AssetParams {
    pub creator: String,
    #[serde(default)]
    pub decimals: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Manager, reserve, freeze, clawback, default-frozen and the like
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Asset definition as reported by the indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Asset {
    pub index: u64,
    pub params: AssetParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Asset definition enriched with the amount an account holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub id: u64,
    pub name: Option<String>,
    pub unit_name: Option<String>,
    pub decimals: u32,
    pub total: u64,
    pub creator: String,
    pub url: Option<String>,
    pub amount: u64,
}

impl AssetMetadata {
    pub fn from_asset(asset: Asset, amount: u64) -> Self {
        let AssetParams {
            creator,
            decimals,
            total,
            name,
            unit_name,
            url,
            ..
        } = asset.params;

        Self {
            id: asset.index,
            name,
            unit_name,
            decimals,
            total,
            creator,
            url,
            amount,
        }
    }
}

/// Number of applications an account created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppsCount {
    pub length: usize,
    pub description: String,
}

impl AppsCount {
    pub fn new(length: usize) -> Self {
        let noun = if length == 1 { "app" } else { "apps" };
        Self {
            length,
            description: format!("{} {} created", length, noun),
        }
    }
}

/// Result of aggregating an account's holdings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedAssets {
    pub apps_count: AppsCount,
    pub assets: Vec<AssetMetadata>,
}

/// Transaction search filters; unset fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub address: Option<String>,
    pub asset_id: Option<u64>,
    pub min_round: Option<u64>,
    pub max_round: Option<u64>,
    pub limit: Option<u32>,
    /// Pagination token from a previous page
    pub next: Option<String>,
}

impl TransactionQuery {
    pub fn for_address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Default::default()
        }
    }

    /// Query-string pairs in indexer parameter names
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(address) = &self.address {
            params.push(("address", address.clone()));
        }
        if let Some(asset_id) = self.asset_id {
            params.push(("asset-id", asset_id.to_string()));
        }
        if let Some(min_round) = self.min_round {
            params.push(("min-round", min_round.to_string()));
        }
        if let Some(max_round) = self.max_round {
            params.push(("max-round", max_round.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(next) = &self.next {
            params.push(("next", next.clone()));
        }
        params
    }
}

/// One page of transaction search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransactionPage {
    #[serde(default)]
    pub transactions: Vec<serde_json::Value>,
    #[serde(default)]
    pub current_round: u64,
    #[serde(default)]
    pub next_token: Option<String>,
}
