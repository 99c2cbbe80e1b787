//! The closed set of actions a session can run.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A user-selected action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    List,
    Buy,
    GetItem,
    GetOrders,
}

/// The entered text named no known action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl Action {
    pub const ALL: [Action; 4] = [Action::List, Action::Buy, Action::GetItem, Action::GetOrders];

    /// The exact word the user types.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Buy => "buy",
            Action::GetItem => "getItem",
            Action::GetOrders => "getOrders",
        }
    }

    /// True for actions that send a transaction.
    pub fn is_mutating(&self) -> bool {
        match self {
            Action::List | Action::Buy => true,
            Action::GetItem | Action::GetOrders => false,
        }
    }

    /// Prompt text listing every action.
    pub fn prompt() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(Action::as_str).collect();
        format!("Enter action ({}): ", names.join("/"))
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    /// Case-sensitive exact match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
