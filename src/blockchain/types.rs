//! Chain-specific types and error definitions.

use alloy::primitives::TxHash;
use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// Endpoint unreachable or unusable.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Endpoint serves a different chain than configured.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// The node rejected the transaction before it was broadcast
    /// (revert during estimation, insufficient funds, bad nonce).
    #[error("Transaction rejected: {0}")]
    Submission(String),

    /// RPC failure while waiting for the transaction to be mined.
    #[error("Failed waiting for transaction {tx_hash}: {reason}")]
    Inclusion { tx_hash: TxHash, reason: String },

    /// Transaction was mined but reverted on-chain.
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),

    /// A read-only contract call failed.
    #[error("Contract call failed: {0}")]
    Call(String),
}

impl BlockchainError {
    /// True for failures raised while establishing the connection.
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Wallet(_) | Self::ChainMismatch { .. }
        )
    }
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Lifecycle of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationStatus {
    /// Broadcast, not yet mined.
    Submitted { tx_hash: TxHash },
    /// Mined with the required block depth.
    Confirmed { block_number: u64 },
    /// Mined but reverted, or dropped.
    Failed(String),
}

impl ConfirmationStatus {
    /// Classify a mined receipt.
    pub fn from_receipt(success: bool, block_number: Option<u64>) -> Self {
        match (success, block_number) {
            (false, _) => Self::Failed("Transaction reverted".to_string()),
            (true, Some(block_number)) => Self::Confirmed { block_number },
            (true, None) => Self::Failed("Receipt has no block number".to_string()),
        }
    }
}
