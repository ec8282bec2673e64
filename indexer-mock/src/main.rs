//! Indexer Mock Server
//!
//! A lightweight server answering Algorand indexer queries from fixtures.
//! Designed for local development and integration tests.

use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;

use indexer_mock::{run_server, IndexerStore};

#[derive(Debug)]
struct Config {
    // Fixtures
    fixtures_file: Option<String>,

    // Server
    server_host: String,
    server_port: u16,
}

impl Config {
    fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let fixtures_file = env::var("FIXTURES_FILE").ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8980".to_string())
            .parse()
            .context("Invalid SERVER_PORT")?;

        Ok(Self {
            fixtures_file,
            server_host,
            server_port,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Indexer Mock Server...");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    let store = match &config.fixtures_file {
        Some(path) => IndexerStore::from_file(path)?,
        None => {
            log::info!("No FIXTURES_FILE set, starting with an empty store");
            IndexerStore::default()
        }
    };

    log::info!(
        "Server will listen on {}:{}",
        config.server_host,
        config.server_port
    );

    run_server(Arc::new(store), config.server_host, config.server_port)
        .await
        .context("Server error")?;

    Ok(())
}
