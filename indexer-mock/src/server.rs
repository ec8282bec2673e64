//! Axum HTTP server setup and routing

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::*;
use crate::store::IndexerStore;

pub fn create_router(store: Arc<IndexerStore>) -> Router {
    // Configure CORS to allow requests from wallet frontends/tests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Account endpoints
        .route("/v2/accounts/:address", get(get_account))

        // Asset endpoints
        .route("/v2/assets", get(search_assets))
        .route("/v2/assets/:id", get(get_asset))

        // Transaction endpoints
        .route("/v2/transactions", get(search_transactions))

        // Fixture helper endpoints
        .route("/mock/accounts", post(add_account))
        .route("/mock/assets", post(add_asset))
        .route("/mock/transactions", post(add_transaction))

        // Shared state
        .with_state(store)

        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(store: Arc<IndexerStore>, host: String, port: u16) -> anyhow::Result<()> {
    let app = create_router(store);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("🚀 Indexer mock server listening on http://{}", addr);
    log::info!("🔨 Fixture endpoints: POST /mock/accounts, /mock/assets, /mock/transactions");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Serve on an ephemeral local port in the background, returning the base URL
pub async fn spawn_server(store: Arc<IndexerStore>) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = create_router(store);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            log::error!("Indexer mock server stopped: {}", e);
        }
    });

    log::debug!("Indexer mock serving on http://{}", addr);
    Ok(format!("http://{}", addr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{account_json, asset_json};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_account_and_asset_routes() {
        let store = Arc::new(IndexerStore::default());
        store.set_current_round(42);
        store.insert_account("ADDR1", account_json("ADDR1", 5, &[(7, 3)], 1));
        store.insert_asset(7, asset_json(7, "Gold", "GOLD", 2, 1000, "ADDR1"));

        let (status, body) = get_json(create_router(store.clone()), "/v2/accounts/ADDR1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current-round"], 42);
        assert_eq!(body["account"]["assets"][0]["asset-id"], 7);

        let (status, body) = get_json(create_router(store.clone()), "/v2/assets/7").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["asset"]["params"]["unit-name"], "GOLD");

        let (status, body) = get_json(create_router(store.clone()), "/v2/assets/8").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["message"].as_str().unwrap().contains("asset-id"));

        let (status, _) = get_json(create_router(store), "/v2/assets/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
