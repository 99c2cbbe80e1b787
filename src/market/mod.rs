//! Marketplace operations.
//!
//! # Data Flow
//! ```text
//! cli::session
//!     → Marketplace trait (list, buy, get_item, get_orders)
//!     → blockchain::contract::MarketClient (alloy binding)
//!     → JSON-RPC endpoint
//! ```
//!
//! The trait is the seam between the console workflows and the chain, so
//! the workflows can be driven against any implementation.

pub mod types;

use alloy::primitives::U256;

use crate::blockchain::types::BlockchainResult;

pub use types::{Confirmation, Item, MarketEvent, Order};

/// The marketplace contract's call surface.
#[allow(async_fn_in_trait)]
pub trait Marketplace {
    /// List (or relist) an item. Waits for the transaction to be mined.
    async fn list(&self, item: &Item) -> BlockchainResult<Confirmation>;

    /// Buy one unit of `id`, attaching `value` wei. Waits for the
    /// transaction to be mined.
    async fn buy(&self, id: U256, value: U256) -> BlockchainResult<Confirmation>;

    /// Read a single item.
    async fn get_item(&self, id: U256) -> BlockchainResult<Item>;

    /// Read the caller's orders.
    async fn get_orders(&self) -> BlockchainResult<Vec<Order>>;
}
