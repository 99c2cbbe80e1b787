//! Blockchain RPC connection bound to the session wallet.
//!
//! # Responsibilities
//! - Resolve endpoint and contract settings for one session
//! - Attach the signing wallet to a JSON-RPC provider
//! - Probe the endpoint once and verify the chain ID
//!
//! A single attempt is made; any failure is returned to the caller as-is.

use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use url::Url;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::blockchain::wallet::{Credential, Wallet};
use crate::config::NetworkConfig;

/// Everything needed to open a signing connection, built once per session.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub endpoint_url: Url,
    pub contract_address: Address,
    pub credential: Credential,
    pub expected_chain_id: Option<u64>,
    pub confirmations: u64,
}

impl ConnectionSettings {
    /// Combine validated network config with the session credential.
    pub fn from_config(config: &NetworkConfig, credential: Credential) -> BlockchainResult<Self> {
        let endpoint_url: Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::Connection(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        let contract_address: Address = config.contract_address.parse().map_err(|e| {
            BlockchainError::Connection(format!(
                "Invalid contract address '{}': {}",
                config.contract_address, e
            ))
        })?;

        Ok(Self {
            endpoint_url,
            contract_address,
            credential,
            expected_chain_id: config.chain_id,
            confirmations: config.confirmations.max(1),
        })
    }
}

/// JSON-RPC provider that signs with the session wallet.
#[derive(Clone)]
pub struct LedgerClient {
    provider: DynProvider,
    address: Address,
    chain_id: ChainId,
    endpoint_url: Url,
}

impl LedgerClient {
    /// Bind the credential to the endpoint and check it answers.
    pub async fn connect(settings: &ConnectionSettings) -> BlockchainResult<Self> {
        let wallet = Wallet::from_credential(&settings.credential)?;
        let address = wallet.address();

        let provider = ProviderBuilder::new()
            .wallet(wallet.into_signer())
            .connect_http(settings.endpoint_url.clone())
            .erased();

        let chain_id = provider.get_chain_id().await.map_err(|e| {
            BlockchainError::Connection(format!(
                "Endpoint {} unreachable: {}",
                settings.endpoint_url, e
            ))
        })?;

        if let Some(expected) = settings.expected_chain_id {
            if expected != chain_id {
                return Err(BlockchainError::ChainMismatch {
                    expected,
                    actual: chain_id,
                });
            }
        }

        tracing::info!(
            rpc_url = %settings.endpoint_url,
            chain_id = chain_id,
            address = %address,
            "Connected to ledger"
        );

        Ok(Self {
            provider,
            address,
            chain_id: ChainId(chain_id),
            endpoint_url: settings.endpoint_url.clone(),
        })
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Address transactions are signed from.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }
}

impl std::fmt::Debug for LedgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerClient")
            .field("rpc_url", &self.endpoint_url.as_str())
            .field("chain_id", &self.chain_id.0)
            .field("address", &self.address)
            .finish()
    }
}
