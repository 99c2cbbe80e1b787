//! Marketplace contract binding.
//!
//! The interface is declared statically; a change to the deployed contract
//! needs a matching change here.

use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use alloy::rpc::types::{Log, TransactionReceipt};
use alloy::sol;

use crate::blockchain::client::{ConnectionSettings, LedgerClient};
use crate::blockchain::transaction::PendingTransaction;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::market::{Confirmation, Item, MarketEvent, Marketplace, Order};

sol! {
    #[sol(rpc)]
    #[derive(Debug)]
    contract MarketContract {
        struct Item {
            uint256 id;
            string name;
            string category;
            string image;
            uint256 cost;
            uint256 rating;
            uint256 stock;
        }

        struct Order {
            uint256 time;
            Item item;
        }

        /// Emitted when an item is purchased.
        event Buy(address indexed buyer, uint256 orderId, uint256 itemId);

        /// Emitted when an item is listed.
        event List(string name, uint256 cost, uint256 quantity);

        function list(
            uint256 _id,
            string memory _name,
            string memory _category,
            string memory _image,
            uint256 _cost,
            uint256 _rating,
            uint256 _stock
        ) public;

        function buy(uint256 _id) external payable;

        function withdraw() public;

        function getItem(uint256 _id) external view returns (Item memory);

        function getOrders() external view returns (Order[] memory);
    }
}

impl From<MarketContract::Item> for Item {
    fn from(item: MarketContract::Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            image: item.image,
            cost: item.cost,
            rating: item.rating,
            stock: item.stock,
        }
    }
}

impl From<MarketContract::Order> for Order {
    fn from(order: MarketContract::Order) -> Self {
        Self {
            time: order.time,
            item: order.item.into(),
        }
    }
}

/// Decode the marketplace events in a receipt's logs, skipping anything else.
pub fn decode_events(logs: &[Log]) -> Vec<MarketEvent> {
    logs.iter()
        .filter_map(|log| {
            if let Ok(decoded) = log.log_decode::<MarketContract::Buy>() {
                let event = decoded.inner.data;
                return Some(MarketEvent::Bought {
                    buyer: event.buyer,
                    order_id: event.orderId,
                    item_id: event.itemId,
                });
            }
            if let Ok(decoded) = log.log_decode::<MarketContract::List>() {
                let event = decoded.inner.data;
                return Some(MarketEvent::Listed {
                    name: event.name,
                    cost: event.cost,
                    quantity: event.quantity,
                });
            }
            None
        })
        .collect()
}

fn confirmation_from(receipt: &TransactionReceipt) -> Confirmation {
    Confirmation {
        tx_hash: receipt.transaction_hash,
        block_number: receipt.block_number,
        gas_used: receipt.gas_used,
        events: decode_events(receipt.inner.logs()),
    }
}

/// Signing client for the deployed marketplace contract.
#[derive(Clone)]
pub struct MarketClient {
    ledger: LedgerClient,
    contract: MarketContract::MarketContractInstance<DynProvider>,
    confirmations: u64,
}

impl MarketClient {
    /// Connect to the endpoint and bind the contract address.
    pub async fn connect(settings: &ConnectionSettings) -> BlockchainResult<Self> {
        let ledger = LedgerClient::connect(settings).await?;
        let contract = MarketContract::new(settings.contract_address, ledger.provider().clone());

        Ok(Self {
            ledger,
            contract,
            confirmations: settings.confirmations,
        })
    }

    pub fn contract_address(&self) -> Address {
        *self.contract.address()
    }

    pub fn ledger(&self) -> &LedgerClient {
        &self.ledger
    }
}

impl std::fmt::Debug for MarketClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketClient")
            .field("ledger", &self.ledger)
            .field("contract", self.contract.address())
            .field("confirmations", &self.confirmations)
            .finish()
    }
}

impl Marketplace for MarketClient {
    async fn list(&self, item: &Item) -> BlockchainResult<Confirmation> {
        let call = self.contract.list(
            item.id,
            item.name.clone(),
            item.category.clone(),
            item.image.clone(),
            item.cost,
            item.rating,
            item.stock,
        );
        let pending = call
            .send()
            .await
            .map_err(|e| BlockchainError::Submission(e.to_string()))?;

        let receipt = PendingTransaction::submitted(pending, "list")
            .confirm(self.confirmations)
            .await?;
        Ok(confirmation_from(&receipt))
    }

    async fn buy(&self, id: U256, value: U256) -> BlockchainResult<Confirmation> {
        let call = self.contract.buy(id).value(value);
        let pending = call
            .send()
            .await
            .map_err(|e| BlockchainError::Submission(e.to_string()))?;

        let receipt = PendingTransaction::submitted(pending, "buy")
            .confirm(self.confirmations)
            .await?;
        let confirmation = confirmation_from(&receipt);
        if let Some(order_id) = confirmation.order_id() {
            tracing::info!(item_id = %id, order_id = %order_id, "Order recorded");
        }
        Ok(confirmation)
    }

    async fn get_item(&self, id: U256) -> BlockchainResult<Item> {
        let item = self
            .contract
            .getItem(id)
            .call()
            .await
            .map_err(|e| BlockchainError::Call(e.to_string()))?;
        Ok(item.into())
    }

    async fn get_orders(&self) -> BlockchainResult<Vec<Order>> {
        let orders = self
            .contract
            .getOrders()
            .from(self.ledger.address())
            .call()
            .await
            .map_err(|e| BlockchainError::Call(e.to_string()))?;
        Ok(orders.into_iter().map(Order::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::SolEvent;

    fn rpc_log<E: SolEvent>(event: &E) -> Log {
        Log {
            inner: alloy::primitives::Log {
                address: Address::ZERO,
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_decode_buy_and_list_events() {
        let buyer: Address = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse().unwrap();
        let logs = vec![
            rpc_log(&MarketContract::List {
                name: "Camera".into(),
                cost: U256::from(100),
                quantity: U256::from(3),
            }),
            rpc_log(&MarketContract::Buy {
                buyer,
                orderId: U256::from(1),
                itemId: U256::from(7),
            }),
        ];

        let events = decode_events(&logs);
        assert_eq!(
            events,
            vec![
                MarketEvent::Listed {
                    name: "Camera".into(),
                    cost: U256::from(100),
                    quantity: U256::from(3),
                },
                MarketEvent::Bought {
                    buyer,
                    order_id: U256::from(1),
                    item_id: U256::from(7),
                },
            ]
        );
    }

    #[test]
    fn test_decode_skips_foreign_logs() {
        let foreign = Log {
            inner: alloy::primitives::Log::new_unchecked(
                Address::ZERO,
                vec![alloy::primitives::B256::repeat_byte(0xab)],
                Default::default(),
            ),
            ..Default::default()
        };
        assert!(decode_events(&[foreign]).is_empty());
    }

    #[test]
    fn test_item_conversion() {
        let raw = MarketContract::Order {
            time: U256::from(1_700_000_000u64),
            item: MarketContract::Item {
                id: U256::from(1),
                name: "Shoes".into(),
                category: "clothing".into(),
                image: "ipfs://shoes.png".into(),
                cost: U256::from(25),
                rating: U256::from(5),
                stock: U256::from(9),
            },
        };

        let order = Order::from(raw);
        assert_eq!(order.time, U256::from(1_700_000_000u64));
        assert_eq!(order.item.name, "Shoes");
        assert_eq!(order.item.stock, U256::from(9));
    }
}
