//! Interactive client for the on-chain marketplace contract.

pub mod blockchain;
pub mod cli;
pub mod config;
pub mod market;
pub mod observability;

pub use config::ClientConfig;
pub use market::Marketplace;
