//! Command-line surface.
//!
//! Flags only select configuration; the session itself is driven by
//! interactive prompts (see [`session`]).

pub mod action;
pub mod prompt;
pub mod session;

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::{finalize, read_config};
use crate::config::{ClientConfig, ConfigError};

pub use action::Action;
pub use prompt::{PromptError, Prompter};
pub use session::{Command, SessionError};

#[derive(Parser, Debug)]
#[command(name = "etherwork", version)]
#[command(about = "List, buy and inspect items on the marketplace contract", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON-RPC endpoint (overrides the config file)
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Marketplace contract address (overrides the config file)
    #[arg(long)]
    pub contract: Option<String>,
}

impl Cli {
    /// Load the config file if given, apply flag overrides, validate.
    pub fn resolve_config(&self) -> Result<ClientConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ClientConfig::default(),
        };

        if let Some(rpc_url) = &self.rpc_url {
            config.network.rpc_url = rpc_url.clone();
        }
        if let Some(contract) = &self.contract {
            config.network.contract_address = contract.clone();
        }

        finalize(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{DEFAULT_CONTRACT_ADDRESS, DEFAULT_RPC_URL};

    #[test]
    fn test_no_flags_uses_defaults() {
        let cli = Cli::try_parse_from(["etherwork"]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.network.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.network.contract_address, DEFAULT_CONTRACT_ADDRESS);
    }

    #[test]
    fn test_flag_overrides() {
        let cli = Cli::try_parse_from([
            "etherwork",
            "--rpc-url",
            "http://127.0.0.1:8545",
            "--contract",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.network.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(
            config.network.contract_address,
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        );
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let cli = Cli::try_parse_from(["etherwork", "--contract", "nope"]).unwrap();
        let err = cli.resolve_config().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_private_key_flag_does_not_exist() {
        assert!(Cli::try_parse_from(["etherwork", "--private-key", "abc"]).is_err());
    }
}
