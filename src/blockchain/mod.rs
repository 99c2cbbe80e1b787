//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Interactive prompt (private key)
//!     → wallet.rs (credential, signer)
//!     → client.rs (RPC connection, chain check)
//!     → contract.rs (marketplace binding, event decoding)
//!     → transaction.rs (submit, await inclusion)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from the interactive prompt
//! - Never log private keys or sensitive data
//! - One connection attempt per session, no retries

pub mod client;
pub mod contract;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::{ConnectionSettings, LedgerClient};
pub use contract::MarketClient;
pub use types::{BlockchainError, BlockchainResult, ChainId};
pub use wallet::{Credential, Wallet};
