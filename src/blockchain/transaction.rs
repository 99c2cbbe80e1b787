//! Submitted-transaction tracking and confirmation.
//!
//! # Lifecycle
//! ```text
//! send() ──▶ Submitted ──(await inclusion)──▶ Confirmed
//!                                       └──▶ Failed (reverted / RPC error)
//! ```
//!
//! There is no timeout on the wait: an unresponsive network blocks the
//! session until the user interrupts the process.

use alloy::network::{Ethereum, ReceiptResponse as _};
use alloy::primitives::TxHash;
use alloy::providers::PendingTransactionBuilder;
use alloy::rpc::types::TransactionReceipt;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ConfirmationStatus};

/// A broadcast transaction that has not been mined yet.
pub struct PendingTransaction {
    inner: PendingTransactionBuilder<Ethereum>,
    label: &'static str,
    status: ConfirmationStatus,
}

impl PendingTransaction {
    /// Wrap a freshly broadcast transaction.
    pub fn submitted(inner: PendingTransactionBuilder<Ethereum>, label: &'static str) -> Self {
        let tx_hash = *inner.tx_hash();
        tracing::info!(tx_hash = %tx_hash, action = label, "Transaction submitted");

        Self {
            inner,
            label,
            status: ConfirmationStatus::Submitted { tx_hash },
        }
    }

    pub fn tx_hash(&self) -> TxHash {
        *self.inner.tx_hash()
    }

    pub fn status(&self) -> &ConfirmationStatus {
        &self.status
    }

    /// Block until the transaction is mined `confirmations` deep.
    ///
    /// Returns the receipt of a successful transaction; a reverted one is
    /// an error.
    pub async fn confirm(self, confirmations: u64) -> BlockchainResult<TransactionReceipt> {
        let tx_hash = self.tx_hash();
        tracing::debug!(tx_hash = %tx_hash, confirmations, "Waiting for inclusion");

        let receipt = self
            .inner
            .with_required_confirmations(confirmations)
            .get_receipt()
            .await
            .map_err(|e| BlockchainError::Inclusion {
                tx_hash,
                reason: e.to_string(),
            })?;

        match ConfirmationStatus::from_receipt(receipt.status(), receipt.block_number) {
            ConfirmationStatus::Confirmed { block_number } => {
                tracing::info!(
                    tx_hash = %tx_hash,
                    action = self.label,
                    block_number,
                    gas_used = receipt.gas_used,
                    "Transaction confirmed"
                );
                Ok(receipt)
            }
            ConfirmationStatus::Failed(reason) => {
                tracing::warn!(tx_hash = %tx_hash, action = self.label, %reason, "Transaction failed");
                Err(BlockchainError::Reverted(tx_hash))
            }
            ConfirmationStatus::Submitted { .. } => Err(BlockchainError::Inclusion {
                tx_hash,
                reason: "receipt returned before inclusion".to_string(),
            }),
        }
    }
}

impl std::fmt::Debug for PendingTransaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingTransaction")
            .field("tx_hash", &self.tx_hash())
            .field("action", &self.label)
            .field("status", &self.status)
            .finish()
    }
}
