use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::WalletProvider;
use crate::constants::{ProviderEnv, WALLETCONNECT_STORAGE_KEY};
use crate::error::SessionError;
use crate::storage::Storage;
use crate::Result;

/// The parts of the WalletConnect session blob this crate reads
///
/// The blob is owned by the WalletConnect client; unknown fields are ignored
/// and `accounts` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConnectSession {
    #[serde(default)]
    pub accounts: Option<Vec<String>>,
}

impl WalletConnectSession {
    /// Parse a stored blob, `None` when it is not a JSON object
    pub fn parse(blob: &str) -> Option<Self> {
        match serde_json::from_str(blob) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("Ignoring unparsable WalletConnect session: {}", e);
                None
            }
        }
    }

    /// First paired account, if the session lists any
    pub fn first_account(&self) -> Option<&str> {
        self.accounts.as_ref()?.first().map(String::as_str)
    }
}

/// Resolves accounts from the WalletConnect session persisted in storage
///
/// Pairing itself happens in the WalletConnect client, which writes the
/// session blob under the `walletconnect` key.
pub struct WalletConnectProvider {
    storage: Arc<dyn Storage>,
}

impl WalletConnectProvider {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    fn session(&self) -> Result<Option<WalletConnectSession>> {
        Ok(self
            .storage
            .get_item(WALLETCONNECT_STORAGE_KEY)?
            .filter(|blob| !blob.is_empty())
            .and_then(|blob| WalletConnectSession::parse(&blob)))
    }
}

#[async_trait]
impl WalletProvider for WalletConnectProvider {
    fn name(&self) -> &str {
        "WalletConnect"
    }

    async fn accounts(&self, provider_env: ProviderEnv) -> Result<Vec<String>> {
        let session = self.session()?.ok_or_else(|| {
            SessionError::Wallet("no paired WalletConnect session".to_string())
        })?;

        let accounts = session.accounts.unwrap_or_default();
        log::debug!(
            "WalletConnect session on {} exposes {} account(s)",
            provider_env,
            accounts.len()
        );
        Ok(accounts)
    }

    async fn disconnect(&self) -> Result<()> {
        log::info!("Killing WalletConnect session");
        self.storage.remove_item(WALLETCONNECT_STORAGE_KEY)?;
        Ok(())
    }
}
