//! Algorand indexer HTTP client

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::networks::types::{AccountRecord, Asset, TransactionPage};
use crate::Result;

#[derive(Deserialize)]
struct AccountResponse {
    account: AccountRecord,
}

#[derive(Deserialize)]
struct AssetResponse {
    asset: Asset,
}

#[derive(Deserialize)]
struct AssetsResponse {
    #[serde(default)]
    assets: Vec<Asset>,
}

#[derive(Clone, Debug)]
pub struct IndexerClient {
    client: reqwest::Client,
    base_url: String,
}

impl IndexerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.indexer_url.clone())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {} {:?}", url, query);

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SessionError::indexer(format!(
                "GET {} returned {}: {}",
                path,
                status,
                body.trim()
            )));
        }

        Ok(response.json::<T>().await?)
    }

    /// GET /v2/accounts/{address}
    pub async fn fetch_account(&self, address: &str) -> Result<AccountRecord> {
        let response: AccountResponse = self
            .get_json(&format!("/v2/accounts/{}", address), &[])
            .await?;
        Ok(response.account)
    }

    /// GET /v2/assets/{id}
    pub async fn fetch_asset(&self, id: u64) -> Result<Asset> {
        let response: AssetResponse = self.get_json(&format!("/v2/assets/{}", id), &[]).await?;
        Ok(response.asset)
    }

    /// GET /v2/assets?name={name}
    pub async fn search_assets_by_name(&self, name: &str) -> Result<Vec<Asset>> {
        let response: AssetsResponse = self
            .get_json("/v2/assets", &[("name", name.to_string())])
            .await?;
        Ok(response.assets)
    }

    /// GET /v2/transactions
    pub async fn search_for_transactions(
        &self,
        params: &[(&str, String)],
    ) -> Result<TransactionPage> {
        self.get_json("/v2/transactions", params).await
    }
}
