//! Session configuration from environment variables
//!
//! Controls the Algorand provider environment, the indexer endpoint and
//! where session keys are persisted. Defaults to TestNet with in-memory storage.

use crate::constants::ProviderEnv;
use std::env;
use std::path::PathBuf;

const TESTNET_INDEXER_URL: &str = "https://testnet-idx.algonode.cloud";
const MAINNET_INDEXER_URL: &str = "https://mainnet-idx.algonode.cloud";

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Algorand deployment requests target
    pub provider_env: ProviderEnv,
    /// Indexer API base URL
    pub indexer_url: String,
    /// JSON file backing the session store (in-memory when unset)
    pub session_file: Option<PathBuf>,
}

impl SessionConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `ALGO_NETWORK`: "testnet" (default) or "mainnet"
    /// - `INDEXER_URL`: indexer endpoint (optional, defaults per network)
    /// - `SESSION_FILE`: path of the JSON session store (optional)
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Point at a local indexer mock
    /// ALGO_NETWORK=testnet INDEXER_URL=http://localhost:8980 cargo test
    /// ```
    pub fn from_env() -> Self {
        let network_str = env::var("ALGO_NETWORK")
            .unwrap_or_else(|_| "testnet".to_string())
            .to_lowercase();

        let provider_env = match network_str.parse::<ProviderEnv>() {
            Ok(env) => {
                log::info!("🌐 Using Algorand {}", env);
                env
            }
            Err(_) if network_str.is_empty() => ProviderEnv::TestNet,
            Err(_) => {
                log::warn!("⚠️  Unknown network '{}', defaulting to TestNet", network_str);
                ProviderEnv::TestNet
            }
        };

        let indexer_url = env::var("INDEXER_URL").unwrap_or_else(|_| {
            let default_url = Self::default_indexer_url(provider_env).to_string();
            log::info!("📡 Indexer URL: {}", default_url);
            default_url
        });

        let session_file = env::var("SESSION_FILE").ok().map(PathBuf::from);
        if let Some(ref path) = session_file {
            log::info!("💾 Session file: {}", path.display());
        }

        Self {
            provider_env,
            indexer_url,
            session_file,
        }
    }

    /// Public indexer endpoint for a provider environment
    pub fn default_indexer_url(env: ProviderEnv) -> &'static str {
        match env {
            ProviderEnv::TestNet => TESTNET_INDEXER_URL,
            ProviderEnv::MainNet => MAINNET_INDEXER_URL,
        }
    }

    /// Configuration targeting a specific indexer (for local mocks)
    pub fn with_indexer(indexer_url: impl Into<String>) -> Self {
        Self {
            indexer_url: indexer_url.into(),
            ..Default::default()
        }
    }
}

impl Default for SessionConfig {
    /// Default configuration (TestNet, in-memory session store)
    fn default() -> Self {
        Self {
            provider_env: ProviderEnv::TestNet,
            indexer_url: TESTNET_INDEXER_URL.to_string(),
            session_file: None,
        }
    }
}
