//! etherwork: list, buy and inspect marketplace items from the terminal.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!   │  prompts   │──▶│  dispatcher  │──▶│  workflows   │──▶│   contract   │──▶ JSON-RPC
//!   │ key/action │   │ Action enum  │   │ tx | query   │   │   binding    │    endpoint
//!   └────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! Every failure ends up here, is printed as `Error: ...` and the process
//! exits normally.

use clap::Parser;

use etherwork::cli::{session, Cli};
use etherwork::observability;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    observability::init_logging(&config.observability);

    tracing::debug!(
        rpc_url = %config.network.rpc_url,
        contract = %config.network.contract_address,
        confirmations = config.network.confirmations,
        "Configuration loaded"
    );

    let stdin = std::io::stdin();
    if let Err(e) = session::run(&config, stdin.lock(), std::io::stdout()).await {
        tracing::debug!(error = ?e, "Session failed");
        eprintln!("Error: {}", e);
    }
}
