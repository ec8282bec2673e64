use async_trait::async_trait;

use super::WalletProvider;
use crate::constants::ProviderEnv;
use crate::Result;

/// Web wallet that exposes a fixed list of authorised addresses
///
/// Stands in for a browser-extension wallet in headless contexts
/// (watch-only sessions, tests, scripted tooling).
#[derive(Debug, Clone)]
pub struct StaticWalletProvider {
    name: String,
    accounts: Vec<String>,
}

impl StaticWalletProvider {
    pub fn new(name: impl Into<String>, accounts: Vec<String>) -> Self {
        Self {
            name: name.into(),
            accounts,
        }
    }
}

#[async_trait]
impl WalletProvider for StaticWalletProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn accounts(&self, _provider_env: ProviderEnv) -> Result<Vec<String>> {
        Ok(self.accounts.clone())
    }

    async fn disconnect(&self) -> Result<()> {
        log::debug!("{} disconnected", self.name);
        Ok(())
    }
}
