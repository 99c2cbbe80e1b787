//! Marketplace domain types.
//!
//! Amounts and counters are `U256` to match the contract's `uint256`
//! fields. They serialize as decimal strings so printed values read the
//! same as on a block explorer.

use alloy::primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

/// A listed product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(with = "decimal")]
    pub id: U256,
    pub name: String,
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Price in wei.
    #[serde(with = "decimal")]
    pub cost: U256,
    #[serde(with = "decimal")]
    pub rating: U256,
    #[serde(with = "decimal")]
    pub stock: U256,
}

/// A completed purchase: block timestamp plus the item as it was sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(with = "decimal")]
    pub time: U256,
    pub item: Item,
}

/// Events emitted by the marketplace contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MarketEvent {
    Bought {
        buyer: Address,
        #[serde(with = "decimal")]
        order_id: U256,
        #[serde(with = "decimal")]
        item_id: U256,
    },
    Listed {
        name: String,
        #[serde(with = "decimal")]
        cost: U256,
        #[serde(with = "decimal")]
        quantity: U256,
    },
}

/// Outcome of a mined, successful state-changing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub events: Vec<MarketEvent>,
}

impl Confirmation {
    /// Order id from the `Buy` event, if the receipt carried one.
    pub fn order_id(&self) -> Option<U256> {
        self.events.iter().find_map(|event| match event {
            MarketEvent::Bought { order_id, .. } => Some(*order_id),
            MarketEvent::Listed { .. } => None,
        })
    }
}

mod decimal {
    use alloy::primitives::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        U256::from_str_radix(&raw, 10).map_err(de::Error::custom)
    }
}
