//! Configuration validation.
//!
//! Serde handles the syntax; this checks that the values make sense for a
//! session: the endpoint is a URL, the contract is an address, at least one
//! confirmation is awaited and the log level is known.
//!
//! Returns every problem found, not just the first.

use alloy::primitives::Address;
use thiserror::Error;

use crate::config::schema::ClientConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid rpc_url '{url}': {reason}")]
    RpcUrl { url: String, reason: String },

    #[error("invalid contract_address '{0}'")]
    ContractAddress(String),

    #[error("confirmations must be at least 1")]
    ZeroConfirmations,

    #[error("unknown log_level '{0}'")]
    LogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let network = &config.network;

    match network.rpc_url.parse::<url::Url>() {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::RpcUrl {
            url: network.rpc_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::RpcUrl {
            url: network.rpc_url.clone(),
            reason: e.to_string(),
        }),
    }

    if network.contract_address.parse::<Address>().is_err() {
        errors.push(ValidationError::ContractAddress(
            network.contract_address.clone(),
        ));
    }

    if network.confirmations == 0 {
        errors.push(ValidationError::ZeroConfirmations);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
