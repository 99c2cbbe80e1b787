//! Shared helpers for integration tests.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use alloy::primitives::{Address, TxHash, U256};
use etherwork::blockchain::{BlockchainError, BlockchainResult};
use etherwork::market::{Confirmation, Item, MarketEvent, Marketplace, Order};

/// In-memory stand-in for the marketplace contract.
///
/// Applies the same rules as the deployed contract: buying needs enough
/// value and stock, snapshots the item into an order, then decrements stock.
#[derive(Default)]
pub struct MemoryMarketplace {
    items: Mutex<HashMap<U256, Item>>,
    orders: Mutex<Vec<Order>>,
    block: AtomicU64,
    calls: AtomicU64,
}

#[allow(dead_code)]
impl MemoryMarketplace {
    pub fn new() -> Self {
        Self {
            block: AtomicU64::new(100),
            ..Self::default()
        }
    }

    /// Number of operations received.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn order_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    fn mine(&self, events: Vec<MarketEvent>) -> Confirmation {
        let block = self.block.fetch_add(1, Ordering::SeqCst);
        Confirmation {
            tx_hash: TxHash::with_last_byte((block % 256) as u8),
            block_number: Some(block),
            gas_used: 50_000,
            events,
        }
    }
}

impl Marketplace for MemoryMarketplace {
    async fn list(&self, item: &Item) -> BlockchainResult<Confirmation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.items.lock().unwrap().insert(item.id, item.clone());
        Ok(self.mine(vec![MarketEvent::Listed {
            name: item.name.clone(),
            cost: item.cost,
            quantity: item.stock,
        }]))
    }

    async fn buy(&self, id: U256, value: U256) -> BlockchainResult<Confirmation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut items = self.items.lock().unwrap();
        let Some(item) = items.get_mut(&id) else {
            return Err(BlockchainError::Submission(
                "execution reverted: out of stock".to_string(),
            ));
        };

        if value < item.cost {
            return Err(BlockchainError::Submission(
                "execution reverted: insufficient payment".to_string(),
            ));
        }
        if item.stock == U256::ZERO {
            return Err(BlockchainError::Submission(
                "execution reverted: out of stock".to_string(),
            ));
        }

        let mut orders = self.orders.lock().unwrap();
        let order_count = orders.len() as u64;
        orders.push(Order {
            time: U256::from(1_700_000_000u64 + order_count),
            item: item.clone(),
        });
        item.stock -= U256::from(1);
        let order_id = U256::from(orders.len());

        Ok(self.mine(vec![MarketEvent::Bought {
            buyer: Address::ZERO,
            order_id,
            item_id: id,
        }]))
    }

    async fn get_item(&self, id: U256) -> BlockchainResult<Item> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let items = self.items.lock().unwrap();
        Ok(items.get(&id).cloned().unwrap_or_else(empty_item))
    }

    async fn get_orders(&self) -> BlockchainResult<Vec<Order>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.orders.lock().unwrap().clone())
    }
}

/// What the contract returns for an id that was never listed.
fn empty_item() -> Item {
    Item {
        id: U256::ZERO,
        name: String::new(),
        category: String::new(),
        image: String::new(),
        cost: U256::ZERO,
        rating: U256::ZERO,
        stock: U256::ZERO,
    }
}

/// A listed item used across tests: 1 ETH camera, 5 in stock.
#[allow(dead_code)]
pub fn camera(id: u64) -> Item {
    Item {
        id: U256::from(id),
        name: "Camera".to_string(),
        category: "electronics".to_string(),
        image: "ipfs://QmCamera/camera.jpg".to_string(),
        cost: U256::from(1_000_000_000_000_000_000u128),
        rating: U256::from(4),
        stock: U256::from(5),
    }
}

/// Console input from a list of answers.
#[allow(dead_code)]
pub fn answers(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut text = lines.join("\n");
    text.push('\n');
    Cursor::new(text.into_bytes())
}
