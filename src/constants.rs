//! Network registry and well-known storage keys

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key holding the selected network abbreviation
pub const NETWORK_STORAGE_KEY: &str = "active-chain";

/// Storage key holding a plain web-wallet address
pub const USER_STORAGE_KEY: &str = "user";

/// Storage key holding the WalletConnect session blob
pub const WALLETCONNECT_STORAGE_KEY: &str = "walletconnect";

/// Abbreviation of the network used when `active-chain` is unset
pub const DEFAULT_NETWORK: &str = "ALGO";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkData {
    pub name: &'static str,
    pub abbr: &'static str,
    pub decimals: u32,
}

const NETWORKS: &[NetworkData] = &[
    NetworkData {
        name: "Algorand",
        abbr: "ALGO",
        decimals: 6,
    },
    NetworkData {
        name: "Ethereum",
        abbr: "ETH",
        decimals: 18,
    },
];

/// Look up a network by its abbreviation
pub fn network(abbr: &str) -> Option<&'static NetworkData> {
    NETWORKS.iter().find(|n| n.abbr == abbr)
}

/// All registered networks
pub fn networks() -> &'static [NetworkData] {
    NETWORKS
}

/// Which deployment of a chain requests target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProviderEnv {
    #[default]
    TestNet,
    MainNet,
}

impl fmt::Display for ProviderEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TestNet => write!(f, "TestNet"),
            Self::MainNet => write!(f, "MainNet"),
        }
    }
}

impl FromStr for ProviderEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "testnet" => Ok(Self::TestNet),
            "mainnet" => Ok(Self::MainNet),
            other => Err(format!("Unknown provider environment: {}", other)),
        }
    }
}
