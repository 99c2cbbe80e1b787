//! One interactive session: prompt, dispatch, execute, report.
//!
//! # Flow
//! ```text
//! private key prompt
//!     → action prompt ──(unknown)──▶ "Unknown action." (no network)
//!     → per-action prompts (typed, abort on bad input)
//!     → connect (wallet + endpoint)
//!     → transaction workflow (list, buy) | query workflow (getItem, getOrders)
//! ```

use std::io::{BufRead, Write};

use alloy::primitives::U256;
use thiserror::Error;

use crate::blockchain::{BlockchainError, ConnectionSettings, Credential, MarketClient};
use crate::cli::action::Action;
use crate::cli::prompt::{PromptError, Prompter};
use crate::config::ClientConfig;
use crate::market::{Item, Marketplace};

/// Printed when the action word matches nothing.
pub const UNKNOWN_ACTION_MESSAGE: &str = "Unknown action.";

/// Anything that can end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] PromptError),

    #[error(transparent)]
    Blockchain(#[from] BlockchainError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to render result: {0}")]
    Render(#[from] serde_json::Error),
}

/// A fully parameterised action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List(Item),
    Buy { id: U256, value: U256 },
    GetItem { id: U256 },
    GetOrders,
}

impl Command {
    pub fn action(&self) -> Action {
        match self {
            Command::List(_) => Action::List,
            Command::Buy { .. } => Action::Buy,
            Command::GetItem { .. } => Action::GetItem,
            Command::GetOrders => Action::GetOrders,
        }
    }
}

/// What the user asked for, ready to run.
#[derive(Debug, Clone)]
pub struct Request {
    pub credential: Credential,
    pub command: Command,
}

/// Ask the per-action questions in order.
pub fn gather_command<R: BufRead, W: Write>(
    action: Action,
    prompter: &mut Prompter<R, W>,
) -> Result<Command, PromptError> {
    let command = match action {
        Action::List => Command::List(Item {
            id: prompter.ask_integer("item ID", "Enter item ID: ")?,
            name: prompter.ask("item name", "Enter item name: ")?,
            category: prompter.ask("item category", "Enter item category: ")?,
            image: prompter.ask("item image URL", "Enter item image URL: ")?,
            cost: prompter.ask_wei("item cost", "Enter item cost (ETH): ")?,
            rating: prompter.ask_integer("item rating", "Enter item rating: ")?,
            stock: prompter.ask_integer("item stock", "Enter item stock: ")?,
        }),
        Action::Buy => Command::Buy {
            id: prompter.ask_integer("item ID", "Enter item ID to buy: ")?,
            value: prompter.ask_wei("item cost", "Enter item cost (ETH): ")?,
        },
        Action::GetItem => Command::GetItem {
            id: prompter.ask_integer("item ID", "Enter item ID to get: ")?,
        },
        Action::GetOrders => Command::GetOrders,
    };
    Ok(command)
}

/// Read the credential, the action and its parameters.
///
/// Returns `Ok(None)` after printing [`UNKNOWN_ACTION_MESSAGE`] when the
/// action is not recognised.
pub fn read_request<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Option<Request>, SessionError> {
    let credential = Credential::new(prompter.ask_required("private key", "Enter your private key: ")?);
    let entered = prompter.ask("action", &Action::prompt())?;

    let action = match entered.parse::<Action>() {
        Ok(action) => action,
        Err(unknown) => {
            tracing::debug!(%unknown, "Rejected action");
            writeln!(prompter.output_mut(), "{}", UNKNOWN_ACTION_MESSAGE)?;
            return Ok(None);
        }
    };

    let command = gather_command(action, prompter)?;
    tracing::debug!(%action, "Request ready");
    Ok(Some(Request { credential, command }))
}

/// Run a command against a marketplace and print the outcome.
pub async fn execute<M: Marketplace, W: Write>(
    market: &M,
    command: Command,
    out: &mut W,
) -> Result<(), SessionError> {
    match command {
        Command::List(item) => {
            let confirmation = market.list(&item).await?;
            tracing::debug!(tx_hash = %confirmation.tx_hash, events = ?confirmation.events, "Listing confirmed");
            writeln!(out, "Item listed with ID: {}", item.id)?;
        }
        Command::Buy { id, value } => {
            let confirmation = market.buy(id, value).await?;
            tracing::debug!(tx_hash = %confirmation.tx_hash, order_id = ?confirmation.order_id(), "Purchase confirmed");
            writeln!(out, "Item with ID {} bought", id)?;
        }
        Command::GetItem { id } => {
            let item = market.get_item(id).await?;
            writeln!(out, "Item Details: {}", serde_json::to_string_pretty(&item)?)?;
        }
        Command::GetOrders => {
            let orders = market.get_orders().await?;
            writeln!(out, "User Orders: {}", serde_json::to_string_pretty(&orders)?)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Full session against the configured contract.
///
/// The connection is only opened once a known action has been fully
/// parameterised.
pub async fn run<R: BufRead, W: Write>(
    config: &ClientConfig,
    input: R,
    output: W,
) -> Result<(), SessionError> {
    let mut prompter = Prompter::new(input, output);

    let Some(request) = read_request(&mut prompter)? else {
        return Ok(());
    };
    let action = request.command.action();

    let settings = ConnectionSettings::from_config(&config.network, request.credential)?;
    let market = MarketClient::connect(&settings).await?;
    tracing::info!(
        %action,
        contract = %market.contract_address(),
        mutating = action.is_mutating(),
        "Executing action"
    );

    execute(&market, request.command, prompter.output_mut()).await
}
