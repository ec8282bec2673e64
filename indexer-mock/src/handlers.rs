//! Axum HTTP handlers for indexer API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::store::IndexerStore;
use crate::types::*;

/// Shared application state
pub type AppState = Arc<IndexerStore>;

/// Custom error type for handlers
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// GET /health
pub async fn health_check(State(store): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        round: store.current_round(),
        db_available: true,
        is_migrating: false,
    })
}

/// GET /v2/accounts/{address}
pub async fn get_account(
    State(store): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = store
        .account(&address)
        .ok_or_else(|| ApiError::NotFound(format!("no accounts found for address: {}", address)))?;
    Ok(Json(AccountResponse {
        account,
        current_round: store.current_round(),
    }))
}

/// GET /v2/assets/{id}
pub async fn get_asset(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AssetResponse>, ApiError> {
    let id: u64 = id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid asset id: {}", id)))?;
    let asset = store
        .asset(id)
        .ok_or_else(|| ApiError::NotFound(format!("no assets found for asset-id: {}", id)))?;
    Ok(Json(AssetResponse {
        asset,
        current_round: store.current_round(),
    }))
}

/// GET /v2/assets?name=
pub async fn search_assets(
    State(store): State<AppState>,
    Query(search): Query<AssetSearch>,
) -> Json<AssetsResponse> {
    Json(AssetsResponse {
        assets: store.search_assets(search.name.as_deref()),
        current_round: store.current_round(),
    })
}

/// GET /v2/transactions
pub async fn search_transactions(
    State(store): State<AppState>,
    Query(filter): Query<TransactionFilter>,
) -> Json<TransactionsResponse> {
    let (transactions, next_token) = store.search_transactions(&filter);
    Json(TransactionsResponse {
        transactions,
        current_round: store.current_round(),
        next_token,
    })
}

// ============================================================================
// FIXTURE HELPER ENDPOINTS (not part of the indexer API)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AccountFixtureRequest {
    pub address: String,
    pub account: Value,
}

#[derive(Debug, Deserialize)]
pub struct AssetFixtureRequest {
    pub id: u64,
    pub asset: Value,
}

/// POST /mock/accounts
pub async fn add_account(
    State(store): State<AppState>,
    Json(req): Json<AccountFixtureRequest>,
) -> StatusCode {
    log::info!("Adding account fixture {}", req.address);
    store.insert_account(req.address, req.account);
    StatusCode::CREATED
}

/// POST /mock/assets
pub async fn add_asset(
    State(store): State<AppState>,
    Json(req): Json<AssetFixtureRequest>,
) -> StatusCode {
    log::info!("Adding asset fixture {}", req.id);
    store.insert_asset(req.id, req.asset);
    StatusCode::CREATED
}

/// POST /mock/transactions
pub async fn add_transaction(
    State(store): State<AppState>,
    Json(transaction): Json<Value>,
) -> StatusCode {
    store.insert_transaction(transaction);
    StatusCode::CREATED
}
