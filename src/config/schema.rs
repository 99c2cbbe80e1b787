//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file.
//! Every field has a default, so an empty file (or no file) yields the
//! stock Sepolia marketplace setup.

use serde::{Deserialize, Serialize};

/// Public Sepolia endpoint used when nothing else is configured.
pub const DEFAULT_RPC_URL: &str = "https://rpc.ankr.com/eth_sepolia";

/// Deployed marketplace contract.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x15FCf80d3ee270455d596c93bb37B4f1E1Aa15F7";

/// Root configuration for the client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Endpoint and contract settings.
    pub network: NetworkConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Network and contract settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Address of the marketplace contract.
    pub contract_address: String,

    /// Expected chain ID. Checked against the endpoint when set.
    pub chain_id: Option<u64>,

    /// Block confirmations to wait for after a transaction is mined.
    pub confirmations: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            chain_id: None,
            confirmations: 1,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
